use chrono::{DateTime, Utc};

use crate::{
    cast_member::domain::model::value_objects::cast_member_id::CastMemberId,
    category::domain::model::value_objects::category_id::CategoryId,
    genre::domain::model::value_objects::genre_id::GenreId,
    shared::domain::model::{
        entities::entity::Entity,
        queries::id_list_filter::dedupe_ids,
        validation::{
            notification::Notification,
            validator_rules::{FieldSource, FieldValue, validate_fields},
        },
    },
    video::domain::model::{
        enums::rating::Rating, validators::video_rules::VIDEO_RULES,
        value_objects::video_id::VideoId,
    },
};

#[derive(Clone, Debug)]
pub struct VideoCreateProps {
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub duration: i32,
    pub rating: Rating,
    pub is_opened: bool,
    pub categories_id: Vec<CategoryId>,
    pub genres_id: Vec<GenreId>,
    pub cast_members_id: Vec<CastMemberId>,
}

/// Persisted state handed back by a repository.
#[derive(Clone, Debug)]
pub struct VideoSnapshot {
    pub video_id: VideoId,
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub duration: i32,
    pub rating: Rating,
    pub is_opened: bool,
    pub is_published: bool,
    pub categories_id: Vec<CategoryId>,
    pub genres_id: Vec<GenreId>,
    pub cast_members_id: Vec<CastMemberId>,
    pub created_at: DateTime<Utc>,
}

/// Video aggregate. The three relation sets keep insertion order and hold
/// each id at most once. A new video is never published.
#[derive(Clone, Debug)]
pub struct Video {
    video_id: VideoId,
    title: String,
    description: String,
    year_launched: i32,
    duration: i32,
    rating: Rating,
    is_opened: bool,
    is_published: bool,
    categories_id: Vec<CategoryId>,
    genres_id: Vec<GenreId>,
    cast_members_id: Vec<CastMemberId>,
    created_at: DateTime<Utc>,
    notification: Notification,
}

impl Video {
    pub fn create(props: VideoCreateProps) -> Self {
        let mut video = Self {
            video_id: VideoId::new_random(),
            title: props.title,
            description: props.description,
            year_launched: props.year_launched,
            duration: props.duration,
            rating: props.rating,
            is_opened: props.is_opened,
            is_published: false,
            categories_id: dedupe_ids(props.categories_id),
            genres_id: dedupe_ids(props.genres_id),
            cast_members_id: dedupe_ids(props.cast_members_id),
            created_at: Utc::now(),
            notification: Notification::new(),
        };
        video.validate(None);
        video
    }

    pub fn restore(snapshot: VideoSnapshot) -> Self {
        Self {
            video_id: snapshot.video_id,
            title: snapshot.title,
            description: snapshot.description,
            year_launched: snapshot.year_launched,
            duration: snapshot.duration,
            rating: snapshot.rating,
            is_opened: snapshot.is_opened,
            is_published: snapshot.is_published,
            categories_id: snapshot.categories_id,
            genres_id: snapshot.genres_id,
            cast_members_id: snapshot.cast_members_id,
            created_at: snapshot.created_at,
            notification: Notification::new(),
        }
    }

    pub fn change_title(&mut self, title: String) {
        self.title = title;
        self.validate(Some(&["title"]));
    }

    pub fn change_description(&mut self, description: String) {
        self.description = description;
        self.validate(Some(&["description"]));
    }

    pub fn change_year_launched(&mut self, year_launched: i32) {
        self.year_launched = year_launched;
        self.validate(Some(&["year_launched"]));
    }

    pub fn change_duration(&mut self, duration: i32) {
        self.duration = duration;
        self.validate(Some(&["duration"]));
    }

    pub fn change_rating(&mut self, rating: Rating) {
        self.rating = rating;
    }

    pub fn mark_as_opened(&mut self) {
        self.is_opened = true;
    }

    pub fn mark_as_not_opened(&mut self) {
        self.is_opened = false;
    }

    pub fn add_category_id(&mut self, category_id: CategoryId) {
        if !self.categories_id.contains(&category_id) {
            self.categories_id.push(category_id);
        }
    }

    pub fn sync_categories_id(&mut self, categories_id: Vec<CategoryId>) {
        self.categories_id = dedupe_ids(categories_id);
    }

    pub fn add_genre_id(&mut self, genre_id: GenreId) {
        if !self.genres_id.contains(&genre_id) {
            self.genres_id.push(genre_id);
        }
    }

    pub fn sync_genres_id(&mut self, genres_id: Vec<GenreId>) {
        self.genres_id = dedupe_ids(genres_id);
    }

    pub fn add_cast_member_id(&mut self, cast_member_id: CastMemberId) {
        if !self.cast_members_id.contains(&cast_member_id) {
            self.cast_members_id.push(cast_member_id);
        }
    }

    pub fn sync_cast_members_id(&mut self, cast_members_id: Vec<CastMemberId>) {
        self.cast_members_id = dedupe_ids(cast_members_id);
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn year_launched(&self) -> i32 {
        self.year_launched
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn is_opened(&self) -> bool {
        self.is_opened
    }

    pub fn is_published(&self) -> bool {
        self.is_published
    }

    pub fn categories_id(&self) -> &[CategoryId] {
        &self.categories_id
    }

    pub fn genres_id(&self) -> &[GenreId] {
        &self.genres_id
    }

    pub fn cast_members_id(&self) -> &[CastMemberId] {
        &self.cast_members_id
    }

    pub fn notification_mut(&mut self) -> &mut Notification {
        &mut self.notification
    }
}

impl PartialEq for Video {
    fn eq(&self, other: &Self) -> bool {
        self.video_id == other.video_id
    }
}

impl Eq for Video {}

impl FieldSource for Video {
    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "title" => FieldValue::Text(Some(self.title.clone())),
            "description" => FieldValue::Text(Some(self.description.clone())),
            "year_launched" => FieldValue::Integer(Some(i64::from(self.year_launched))),
            "duration" => FieldValue::Integer(Some(i64::from(self.duration))),
            "categories_id" => FieldValue::List(self.categories_id.len()),
            "genres_id" => FieldValue::List(self.genres_id.len()),
            "cast_members_id" => FieldValue::List(self.cast_members_id.len()),
            _ => FieldValue::Text(None),
        }
    }
}

impl Entity for Video {
    type Id = VideoId;

    const NAME: &'static str = "Video";

    fn entity_id(&self) -> &VideoId {
        &self.video_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn notification(&self) -> &Notification {
        &self.notification
    }

    fn validate(&mut self, fields: Option<&[&str]>) -> bool {
        let mut notification = std::mem::take(&mut self.notification);
        let valid = validate_fields(VIDEO_RULES, &*self, fields, &mut notification);
        self.notification = notification;
        valid
    }
}
