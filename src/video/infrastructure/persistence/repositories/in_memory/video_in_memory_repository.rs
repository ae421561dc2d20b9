use crate::{
    shared::{
        domain::model::entities::entity::Entity,
        infrastructure::persistence::repositories::in_memory::in_memory_searchable_repository::{
            InMemorySearchPolicy, InMemorySearchableRepository, SortValue,
        },
    },
    video::{
        domain::model::{
            entities::video::Video,
            queries::list_videos_query::{VIDEO_SORTABLE_FIELDS, VideoFilter},
        },
        infrastructure::persistence::repositories::video_repository::VideoRepository,
    },
};

fn any_of<I: PartialEq>(linked: &[I], wanted: Option<&Vec<I>>) -> bool {
    wanted.is_none_or(|wanted| linked.iter().any(|id| wanted.contains(id)))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct VideoSearchPolicy;

impl InMemorySearchPolicy<Video> for VideoSearchPolicy {
    type Filter = VideoFilter;

    fn sortable_fields(&self) -> &'static [&'static str] {
        VIDEO_SORTABLE_FIELDS
    }

    fn matches(&self, video: &Video, filter: &VideoFilter) -> bool {
        let title_matches = filter.title.as_ref().is_none_or(|title| {
            video
                .title()
                .to_lowercase()
                .contains(&title.to_lowercase())
        });

        title_matches
            && any_of(video.categories_id(), filter.categories_id.as_ref())
            && any_of(video.genres_id(), filter.genres_id.as_ref())
            && any_of(video.cast_members_id(), filter.cast_members_id.as_ref())
    }

    fn sort_value(&self, video: &Video, field: &str) -> Option<SortValue> {
        match field {
            "title" => Some(SortValue::Text(video.title().to_string())),
            "created_at" => Some(SortValue::Timestamp(video.created_at())),
            _ => None,
        }
    }
}

pub type VideoInMemoryRepository = InMemorySearchableRepository<Video, VideoSearchPolicy>;

impl VideoInMemoryRepository {
    pub fn empty() -> Self {
        Self::new(VideoSearchPolicy)
    }
}

impl VideoRepository for VideoInMemoryRepository {}
