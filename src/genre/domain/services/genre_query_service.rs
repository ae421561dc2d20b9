use async_trait::async_trait;

use crate::{
    genre::domain::model::queries::{
        genre_details::GenreDetails, get_genre_query::GetGenreQuery,
        list_genres_query::ListGenresQuery,
    },
    shared::domain::model::{
        enums::catalog_domain_error::CatalogDomainError, queries::search_result::SearchResult,
    },
};

#[async_trait]
pub trait GenreQueryService: Send + Sync {
    async fn handle_get(&self, query: GetGenreQuery) -> Result<GenreDetails, CatalogDomainError>;

    async fn handle_list(
        &self,
        query: ListGenresQuery,
    ) -> Result<SearchResult<GenreDetails>, CatalogDomainError>;
}
