use async_trait::async_trait;

use crate::{
    shared::domain::model::{
        enums::catalog_domain_error::CatalogDomainError, queries::search_result::SearchResult,
    },
    video::domain::model::{
        entities::video::Video,
        queries::{get_video_query::GetVideoQuery, list_videos_query::ListVideosQuery},
    },
};

#[async_trait]
pub trait VideoQueryService: Send + Sync {
    async fn handle_get(&self, query: GetVideoQuery) -> Result<Video, CatalogDomainError>;

    async fn handle_list(
        &self,
        query: ListVideosQuery,
    ) -> Result<SearchResult<Video>, CatalogDomainError>;
}
