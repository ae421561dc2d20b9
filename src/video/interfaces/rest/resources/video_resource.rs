use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    shared::{
        domain::model::{entities::entity::Entity, queries::search_result::SearchResult},
        interfaces::rest::resources::pagination_meta_resource::PaginationMetaResource,
    },
    video::domain::model::entities::video::Video,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct VideoResource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub duration: i32,
    pub rating: String,
    pub is_opened: bool,
    pub is_published: bool,
    pub categories_id: Vec<String>,
    pub genres_id: Vec<String>,
    pub cast_members_id: Vec<String>,
    pub created_at: String,
}

fn stringify<I: ToString>(ids: &[I]) -> Vec<String> {
    ids.iter().map(ToString::to_string).collect()
}

impl From<&Video> for VideoResource {
    fn from(video: &Video) -> Self {
        Self {
            id: video.video_id().to_string(),
            title: video.title().to_string(),
            description: video.description().to_string(),
            year_launched: video.year_launched(),
            duration: video.duration(),
            rating: video.rating().as_str().to_string(),
            is_opened: video.is_opened(),
            is_published: video.is_published(),
            categories_id: stringify(video.categories_id()),
            genres_id: stringify(video.genres_id()),
            cast_members_id: stringify(video.cast_members_id()),
            created_at: video.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct VideoCollectionResource {
    pub data: Vec<VideoResource>,
    pub meta: PaginationMetaResource,
}

impl From<SearchResult<Video>> for VideoCollectionResource {
    fn from(result: SearchResult<Video>) -> Self {
        Self {
            meta: PaginationMetaResource::from(&result),
            data: result.items().iter().map(VideoResource::from).collect(),
        }
    }
}
