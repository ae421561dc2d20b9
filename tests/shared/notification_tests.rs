use serde_json::json;
use video_catalog_api::{
    category::domain::model::entities::category::{Category, CategoryCreateProps},
    shared::domain::model::{entities::entity::Entity, validation::notification::Notification},
};

#[test]
fn field_errors_accumulate_in_order() {
    let mut notification = Notification::new();
    notification.add_error("name is required", Some("name"));
    notification.add_error("name is too long", Some("name"));
    notification.add_error("global failure", None);

    assert!(notification.has_errors());
    assert_eq!(
        notification.field_errors("name"),
        Some(&["name is required".to_string(), "name is too long".to_string()][..])
    );
    assert_eq!(
        notification.to_json(),
        json!([{"name": ["name is required", "name is too long"]}, "global failure"])
    );
}

#[test]
fn messages_without_field_are_stored_once() {
    let mut notification = Notification::new();
    notification.add_error("same", None);
    notification.add_error("same", None);

    assert_eq!(notification.to_json(), json!(["same"]));
}

#[test]
fn set_error_replaces_field_messages() {
    let mut notification = Notification::new();
    notification.add_error("old", Some("categories_id"));
    notification.set_error(vec!["a".to_string(), "b".to_string()], Some("categories_id"));

    assert_eq!(notification.to_json(), json!([{"categories_id": ["a", "b"]}]));
}

#[test]
fn copy_errors_merges_other_notification() {
    let mut source = Notification::new();
    source.add_error("bad title", Some("title"));
    source.add_error("loose", None);

    let mut target = Notification::new();
    target.add_error("bad rating", Some("rating"));
    target.copy_errors(&source);

    assert_eq!(
        target.to_json(),
        json!([{"rating": ["bad rating"]}, {"title": ["bad title"]}, "loose"])
    );
}

#[test]
fn repeated_validation_appends_the_same_error_again() {
    let mut category = Category::create(CategoryCreateProps {
        name: "t".repeat(256),
        ..Default::default()
    });
    assert_eq!(category.notification().field_errors("name").map(<[String]>::len), Some(1));

    assert!(!category.validate(None));
    assert!(!category.validate(Some(&["name"])));

    assert_eq!(category.notification().field_errors("name").map(<[String]>::len), Some(3));
}

#[test]
fn valid_entity_has_no_errors() {
    let category = Category::create(CategoryCreateProps {
        name: "Movie".to_string(),
        ..Default::default()
    });

    assert!(!category.notification().has_errors());
    assert_eq!(category.notification().to_json(), json!([]));
}
