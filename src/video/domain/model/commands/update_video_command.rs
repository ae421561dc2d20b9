use crate::{
    shared::domain::model::errors::invalid_uuid_error::InvalidUuidError,
    video::domain::model::value_objects::video_id::VideoId,
};

/// Fields left as `None` keep their stored value. A relation list given as
/// `Some` replaces the whole set.
#[derive(Clone, Debug, Default)]
pub struct UpdateVideoChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year_launched: Option<i32>,
    pub duration: Option<i32>,
    pub rating: Option<String>,
    pub is_opened: Option<bool>,
    pub categories_id: Option<Vec<String>>,
    pub genres_id: Option<Vec<String>>,
    pub cast_members_id: Option<Vec<String>>,
}

#[derive(Clone, Debug)]
pub struct UpdateVideoCommand {
    video_id: VideoId,
    changes: UpdateVideoChanges,
}

impl UpdateVideoCommand {
    pub fn new(video_id: String, changes: UpdateVideoChanges) -> Result<Self, InvalidUuidError> {
        Ok(Self {
            video_id: VideoId::new(video_id)?,
            changes,
        })
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    pub fn changes(&self) -> &UpdateVideoChanges {
        &self.changes
    }
}
