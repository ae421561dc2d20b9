use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    category::{
        domain::model::{entities::category::Category, value_objects::category_id::CategoryId},
        infrastructure::persistence::repositories::category_repository::CategoryRepository,
    },
    genre::{
        domain::{
            model::{
                entities::genre::Genre,
                queries::{
                    genre_details::GenreDetails, get_genre_query::GetGenreQuery,
                    list_genres_query::ListGenresQuery,
                },
            },
            services::genre_query_service::GenreQueryService,
        },
        infrastructure::persistence::repositories::genre_repository::GenreRepository,
    },
    shared::domain::model::{
        entities::entity::Entity,
        enums::catalog_domain_error::CatalogDomainError,
        errors::not_found_error::NotFoundError,
        queries::{id_list_filter::dedupe_ids, search_result::SearchResult},
    },
};

pub struct GenreQueryServiceImpl {
    genre_repository: Arc<dyn GenreRepository>,
    category_repository: Arc<dyn CategoryRepository>,
}

impl GenreQueryServiceImpl {
    pub fn new(
        genre_repository: Arc<dyn GenreRepository>,
        category_repository: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            genre_repository,
            category_repository,
        }
    }

    async fn load_categories(&self, genres: &[Genre]) -> Result<Vec<Category>, CatalogDomainError> {
        let categories_id: Vec<CategoryId> = dedupe_ids(
            genres
                .iter()
                .flat_map(|genre| genre.categories_id().iter().copied()),
        );
        if categories_id.is_empty() {
            return Ok(Vec::new());
        }
        self.category_repository.find_by_ids(&categories_id).await
    }
}

#[async_trait]
impl GenreQueryService for GenreQueryServiceImpl {
    async fn handle_get(&self, query: GetGenreQuery) -> Result<GenreDetails, CatalogDomainError> {
        let genre = self
            .genre_repository
            .find_by_id(query.genre_id())
            .await?
            .ok_or_else(|| NotFoundError::new(query.genre_id(), Genre::NAME))?;

        let categories = self.load_categories(std::slice::from_ref(&genre)).await?;
        Ok(GenreDetails::assemble(genre, &categories))
    }

    async fn handle_list(
        &self,
        query: ListGenresQuery,
    ) -> Result<SearchResult<GenreDetails>, CatalogDomainError> {
        let result = self.genre_repository.search(query.params()).await?;
        let categories = self.load_categories(result.items()).await?;

        Ok(result.map(|genre| GenreDetails::assemble(genre, &categories)))
    }
}
