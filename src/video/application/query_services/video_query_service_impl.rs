use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    shared::domain::model::{
        entities::entity::Entity, enums::catalog_domain_error::CatalogDomainError,
        errors::not_found_error::NotFoundError, queries::search_result::SearchResult,
    },
    video::{
        domain::{
            model::{
                entities::video::Video,
                queries::{get_video_query::GetVideoQuery, list_videos_query::ListVideosQuery},
            },
            services::video_query_service::VideoQueryService,
        },
        infrastructure::persistence::repositories::video_repository::VideoRepository,
    },
};

pub struct VideoQueryServiceImpl {
    video_repository: Arc<dyn VideoRepository>,
}

impl VideoQueryServiceImpl {
    pub fn new(video_repository: Arc<dyn VideoRepository>) -> Self {
        Self { video_repository }
    }
}

#[async_trait]
impl VideoQueryService for VideoQueryServiceImpl {
    async fn handle_get(&self, query: GetVideoQuery) -> Result<Video, CatalogDomainError> {
        self.video_repository
            .find_by_id(query.video_id())
            .await?
            .ok_or_else(|| NotFoundError::new(query.video_id(), Video::NAME).into())
    }

    async fn handle_list(
        &self,
        query: ListVideosQuery,
    ) -> Result<SearchResult<Video>, CatalogDomainError> {
        self.video_repository.search(query.params()).await
    }
}
