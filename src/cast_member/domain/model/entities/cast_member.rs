use chrono::{DateTime, Utc};

use crate::{
    cast_member::domain::model::{
        enums::cast_member_type::CastMemberType, validators::cast_member_rules::CAST_MEMBER_RULES,
        value_objects::cast_member_id::CastMemberId,
    },
    shared::domain::model::{
        entities::entity::Entity,
        validation::{
            notification::Notification,
            validator_rules::{FieldSource, FieldValue, validate_fields},
        },
    },
};

#[derive(Clone, Debug)]
pub struct CastMemberCreateProps {
    pub name: String,
    pub cast_member_type: CastMemberType,
}

/// A director or actor credited on videos.
#[derive(Clone, Debug)]
pub struct CastMember {
    cast_member_id: CastMemberId,
    name: String,
    cast_member_type: CastMemberType,
    created_at: DateTime<Utc>,
    notification: Notification,
}

impl CastMember {
    pub fn create(props: CastMemberCreateProps) -> Self {
        let mut cast_member = Self {
            cast_member_id: CastMemberId::new_random(),
            name: props.name,
            cast_member_type: props.cast_member_type,
            created_at: Utc::now(),
            notification: Notification::new(),
        };
        cast_member.validate(None);
        cast_member
    }

    pub fn restore(
        cast_member_id: CastMemberId,
        name: String,
        cast_member_type: CastMemberType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            cast_member_id,
            name,
            cast_member_type,
            created_at,
            notification: Notification::new(),
        }
    }

    pub fn change_name(&mut self, name: String) {
        self.name = name;
        self.validate(Some(&["name"]));
    }

    pub fn change_type(&mut self, cast_member_type: CastMemberType) {
        self.cast_member_type = cast_member_type;
    }

    pub fn cast_member_id(&self) -> &CastMemberId {
        &self.cast_member_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cast_member_type(&self) -> CastMemberType {
        self.cast_member_type
    }

    pub fn notification_mut(&mut self) -> &mut Notification {
        &mut self.notification
    }
}

impl PartialEq for CastMember {
    fn eq(&self, other: &Self) -> bool {
        self.cast_member_id == other.cast_member_id
    }
}

impl Eq for CastMember {}

impl FieldSource for CastMember {
    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "name" => FieldValue::Text(Some(self.name.clone())),
            _ => FieldValue::Text(None),
        }
    }
}

impl Entity for CastMember {
    type Id = CastMemberId;

    const NAME: &'static str = "CastMember";

    fn entity_id(&self) -> &CastMemberId {
        &self.cast_member_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn notification(&self) -> &Notification {
        &self.notification
    }

    fn validate(&mut self, fields: Option<&[&str]>) -> bool {
        let mut notification = std::mem::take(&mut self.notification);
        let valid = validate_fields(CAST_MEMBER_RULES, &*self, fields, &mut notification);
        self.notification = notification;
        valid
    }
}
