use video_catalog_api::{
    category::domain::{
        model::commands::{
            create_category_command::CreateCategoryCommand,
            delete_category_command::DeleteCategoryCommand,
            update_category_command::UpdateCategoryCommand,
        },
        services::category_command_service::CategoryCommandService,
    },
    shared::{
        domain::model::enums::catalog_domain_error::CatalogDomainError,
        infrastructure::persistence::repositories::searchable_repository::Repository,
    },
};

use crate::support::{MISSING_ID, category_named, create_command, create_harness};

#[tokio::test]
async fn handle_create_persists_active_category() {
    let harness = create_harness(vec![]);

    let created = harness
        .command_service
        .handle_create(create_command("Movie"))
        .await
        .expect("category should be created");

    assert_eq!(created.name(), "Movie");
    assert_eq!(created.description(), Some("Some description"));
    assert!(created.is_active());
    let stored = harness.repository.find_all().await.expect("find_all");
    assert_eq!(stored, vec![created]);
}

#[tokio::test]
async fn handle_create_rejects_blank_and_long_names() {
    let harness = create_harness(vec![]);

    let blank = harness
        .command_service
        .handle_create(create_command(""))
        .await;
    let long = harness
        .command_service
        .handle_create(CreateCategoryCommand::new("a".repeat(256), None, Some(false)))
        .await;

    match blank {
        Err(CatalogDomainError::EntityValidation(error)) => assert_eq!(
            error.field_errors("name"),
            Some(&["name should not be empty".to_string()][..])
        ),
        other => panic!("expected validation error, got {other:?}"),
    }
    match long {
        Err(CatalogDomainError::EntityValidation(error)) => assert_eq!(
            error.field_errors("name"),
            Some(&["name must be shorter than or equal to 255 characters".to_string()][..])
        ),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(harness.repository.find_all().await.expect("find_all").is_empty());
}

#[tokio::test]
async fn handle_update_applies_only_given_fields() {
    let existing = category_named("Old", 5);
    let category_id = existing.category_id().to_string();
    let harness = create_harness(vec![existing]);

    let command =
        UpdateCategoryCommand::new(category_id, Some("New".to_string()), None, Some(false))
            .expect("valid command");
    let updated = harness
        .command_service
        .handle_update(command)
        .await
        .expect("category should be updated");

    assert_eq!(updated.name(), "New");
    assert_eq!(updated.description(), None);
    assert!(!updated.is_active());
    let stored = harness
        .repository
        .find_by_id(updated.category_id())
        .await
        .expect("find_by_id")
        .expect("category stored");
    assert_eq!(stored.name(), "New");
}

#[tokio::test]
async fn handle_update_of_unknown_category_is_not_found() {
    let harness = create_harness(vec![]);

    let command = UpdateCategoryCommand::new(MISSING_ID.to_string(), None, None, Some(true))
        .expect("valid command");
    let result = harness.command_service.handle_update(command).await;

    match result {
        Err(CatalogDomainError::NotFound(error)) => assert_eq!(
            error.to_string(),
            format!("Category Not Found using ID {MISSING_ID}")
        ),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn handle_delete_removes_category_or_reports_missing() {
    let existing = category_named("Doomed", 1);
    let category_id = existing.category_id().to_string();
    let harness = create_harness(vec![existing]);

    harness
        .command_service
        .handle_delete(DeleteCategoryCommand::new(category_id).expect("valid id"))
        .await
        .expect("category should be deleted");
    assert!(harness.repository.find_all().await.expect("find_all").is_empty());

    let missing = harness
        .command_service
        .handle_delete(DeleteCategoryCommand::new(MISSING_ID.to_string()).expect("valid id"))
        .await;
    assert!(matches!(missing, Err(CatalogDomainError::NotFound(_))));
}

#[test]
fn commands_reject_malformed_ids() {
    let error = DeleteCategoryCommand::new("not-a-uuid".to_string()).expect_err("invalid id");

    assert_eq!(error.to_string(), "ID must be a valid UUID: not-a-uuid");
}
