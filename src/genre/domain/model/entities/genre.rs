use chrono::{DateTime, Utc};

use crate::{
    category::domain::model::value_objects::category_id::CategoryId,
    genre::domain::model::{validators::genre_rules::GENRE_RULES, value_objects::genre_id::GenreId},
    shared::domain::model::{
        entities::entity::Entity,
        queries::id_list_filter::dedupe_ids,
        validation::{
            notification::Notification,
            validator_rules::{FieldSource, FieldValue, validate_fields},
        },
    },
};

#[derive(Clone, Debug, Default)]
pub struct GenreCreateProps {
    pub name: String,
    pub categories_id: Vec<CategoryId>,
    pub is_active: Option<bool>,
}

/// Genre aggregate. `categories_id` keeps insertion order and never holds the
/// same id twice; whether those categories exist is checked by the caller.
#[derive(Clone, Debug)]
pub struct Genre {
    genre_id: GenreId,
    name: String,
    categories_id: Vec<CategoryId>,
    is_active: bool,
    created_at: DateTime<Utc>,
    notification: Notification,
}

impl Genre {
    pub fn create(props: GenreCreateProps) -> Self {
        let mut genre = Self {
            genre_id: GenreId::new_random(),
            name: props.name,
            categories_id: dedupe_ids(props.categories_id),
            is_active: props.is_active.unwrap_or(true),
            created_at: Utc::now(),
            notification: Notification::new(),
        };
        genre.validate(None);
        genre
    }

    pub fn restore(
        genre_id: GenreId,
        name: String,
        categories_id: Vec<CategoryId>,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            genre_id,
            name,
            categories_id,
            is_active,
            created_at,
            notification: Notification::new(),
        }
    }

    pub fn change_name(&mut self, name: String) {
        self.name = name;
        self.validate(Some(&["name"]));
    }

    pub fn add_category_id(&mut self, category_id: CategoryId) {
        if !self.categories_id.contains(&category_id) {
            self.categories_id.push(category_id);
        }
    }

    pub fn remove_category_id(&mut self, category_id: &CategoryId) {
        self.categories_id.retain(|existing| existing != category_id);
    }

    pub fn sync_categories_id(&mut self, categories_id: Vec<CategoryId>) {
        self.categories_id = dedupe_ids(categories_id);
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn genre_id(&self) -> &GenreId {
        &self.genre_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn categories_id(&self) -> &[CategoryId] {
        &self.categories_id
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn notification_mut(&mut self) -> &mut Notification {
        &mut self.notification
    }
}

impl PartialEq for Genre {
    fn eq(&self, other: &Self) -> bool {
        self.genre_id == other.genre_id
    }
}

impl Eq for Genre {}

impl FieldSource for Genre {
    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "name" => FieldValue::Text(Some(self.name.clone())),
            "categories_id" => FieldValue::List(self.categories_id.len()),
            _ => FieldValue::Text(None),
        }
    }
}

impl Entity for Genre {
    type Id = GenreId;

    const NAME: &'static str = "Genre";

    fn entity_id(&self) -> &GenreId {
        &self.genre_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn notification(&self) -> &Notification {
        &self.notification
    }

    fn validate(&mut self, fields: Option<&[&str]>) -> bool {
        let mut notification = std::mem::take(&mut self.notification);
        let valid = validate_fields(GENRE_RULES, &*self, fields, &mut notification);
        self.notification = notification;
        valid
    }
}
