use crate::{
    shared::infrastructure::persistence::repositories::searchable_repository::SearchableRepository,
    video::domain::model::{entities::video::Video, queries::list_videos_query::VideoFilter},
};

pub trait VideoRepository: SearchableRepository<Video, VideoFilter> {}
