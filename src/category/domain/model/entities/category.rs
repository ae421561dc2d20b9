use chrono::{DateTime, Utc};

use crate::{
    category::domain::model::{
        validators::category_rules::CATEGORY_RULES, value_objects::category_id::CategoryId,
    },
    shared::domain::model::{
        entities::entity::Entity,
        validation::{
            notification::Notification,
            validator_rules::{FieldSource, FieldValue, validate_fields},
        },
    },
};

#[derive(Clone, Debug, Default)]
pub struct CategoryCreateProps {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct Category {
    category_id: CategoryId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    notification: Notification,
}

impl Category {
    pub fn create(props: CategoryCreateProps) -> Self {
        let mut category = Self {
            category_id: CategoryId::new_random(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: Utc::now(),
            notification: Notification::new(),
        };
        category.validate(None);
        category
    }

    pub fn restore(
        category_id: CategoryId,
        name: String,
        description: Option<String>,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            category_id,
            name,
            description,
            is_active,
            created_at,
            notification: Notification::new(),
        }
    }

    pub fn change_name(&mut self, name: String) {
        self.name = name;
        self.validate(Some(&["name"]));
    }

    pub fn change_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn notification_mut(&mut self) -> &mut Notification {
        &mut self.notification
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.category_id == other.category_id
    }
}

impl Eq for Category {}

impl FieldSource for Category {
    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "name" => FieldValue::Text(Some(self.name.clone())),
            "description" => FieldValue::Text(self.description.clone()),
            _ => FieldValue::Text(None),
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    const NAME: &'static str = "Category";

    fn entity_id(&self) -> &CategoryId {
        &self.category_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn notification(&self) -> &Notification {
        &self.notification
    }

    fn validate(&mut self, fields: Option<&[&str]>) -> bool {
        let mut notification = std::mem::take(&mut self.notification);
        let valid = validate_fields(CATEGORY_RULES, &*self, fields, &mut notification);
        self.notification = notification;
        valid
    }
}
