use crate::{
    shared::domain::model::errors::invalid_uuid_error::InvalidUuidError,
    video::domain::model::value_objects::video_id::VideoId,
};

#[derive(Clone, Debug)]
pub struct DeleteVideoCommand {
    video_id: VideoId,
}

impl DeleteVideoCommand {
    pub fn new(video_id: String) -> Result<Self, InvalidUuidError> {
        Ok(Self {
            video_id: VideoId::new(video_id)?,
        })
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }
}
