use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    category::domain::model::entities::category::Category,
    shared::{
        domain::model::{entities::entity::Entity, queries::search_result::SearchResult},
        interfaces::rest::resources::pagination_meta_resource::PaginationMetaResource,
    },
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CategoryResource {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

impl From<&Category> for CategoryResource {
    fn from(category: &Category) -> Self {
        Self {
            id: category.category_id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CategoryCollectionResource {
    pub data: Vec<CategoryResource>,
    pub meta: PaginationMetaResource,
}

impl From<SearchResult<Category>> for CategoryCollectionResource {
    fn from(result: SearchResult<Category>) -> Self {
        Self {
            meta: PaginationMetaResource::from(&result),
            data: result.items().iter().map(CategoryResource::from).collect(),
        }
    }
}
