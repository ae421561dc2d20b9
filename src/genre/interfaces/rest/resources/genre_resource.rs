use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    genre::domain::model::queries::genre_details::GenreDetails,
    shared::{
        domain::model::{entities::entity::Entity, queries::search_result::SearchResult},
        interfaces::rest::resources::pagination_meta_resource::PaginationMetaResource,
    },
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GenreCategoryResource {
    pub id: String,
    pub name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GenreResource {
    pub id: String,
    pub name: String,
    pub categories_id: Vec<String>,
    pub categories: Vec<GenreCategoryResource>,
    pub is_active: bool,
    pub created_at: String,
}

impl From<&GenreDetails> for GenreResource {
    fn from(details: &GenreDetails) -> Self {
        let genre = &details.genre;
        Self {
            id: genre.genre_id().to_string(),
            name: genre.name().to_string(),
            categories_id: genre
                .categories_id()
                .iter()
                .map(ToString::to_string)
                .collect(),
            categories: details
                .categories
                .iter()
                .map(|category| GenreCategoryResource {
                    id: category.category_id().to_string(),
                    name: category.name().to_string(),
                    is_active: category.is_active(),
                })
                .collect(),
            is_active: genre.is_active(),
            created_at: genre.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GenreCollectionResource {
    pub data: Vec<GenreResource>,
    pub meta: PaginationMetaResource,
}

impl From<SearchResult<GenreDetails>> for GenreCollectionResource {
    fn from(result: SearchResult<GenreDetails>) -> Self {
        Self {
            meta: PaginationMetaResource::from(&result),
            data: result.items().iter().map(GenreResource::from).collect(),
        }
    }
}
