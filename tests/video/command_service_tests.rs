use video_catalog_api::{
    shared::{
        domain::model::enums::catalog_domain_error::CatalogDomainError,
        infrastructure::persistence::repositories::searchable_repository::Repository,
    },
    video::domain::{
        model::{
            commands::{
                create_video_command::CreateVideoCommand,
                delete_video_command::DeleteVideoCommand,
                update_video_command::{UpdateVideoChanges, UpdateVideoCommand},
            },
            enums::rating::Rating,
        },
        services::video_command_service::VideoCommandService,
    },
};

use crate::support::{
    MISSING_ID, cast_member_named, category_named, create_command, create_harness, genre_named,
    video_titled,
};

#[tokio::test]
async fn handle_create_persists_video_with_relations() {
    let category = category_named("Movie");
    let genre = genre_named("Action", &[&category]);
    let cast_member = cast_member_named("Jane");
    let command = create_command(&category, &genre, &cast_member);
    let harness = create_harness(vec![category.clone()], vec![genre.clone()], vec![cast_member.clone()], vec![]);

    let video = harness
        .command_service
        .handle_create(command)
        .await
        .expect("video should be created");

    assert_eq!(video.rating(), Rating::Age14);
    assert!(video.is_opened());
    assert!(!video.is_published());
    assert_eq!(video.categories_id(), &[*category.category_id()]);
    assert_eq!(video.genres_id(), &[*genre.genre_id()]);
    assert_eq!(video.cast_members_id(), &[*cast_member.cast_member_id()]);
    assert_eq!(harness.unit_of_work.run_calls(), 1);
    assert_eq!(harness.video_repository.find_all().await.expect("find_all"), vec![video]);
}

#[tokio::test]
async fn handle_create_collects_every_problem_before_writing() {
    let category = category_named("Movie");
    let genre = genre_named("Action", &[&category]);
    let cast_member = cast_member_named("Jane");
    let command = CreateVideoCommand {
        title: String::new(),
        rating: "99".to_string(),
        genres_id: vec![MISSING_ID.to_string()],
        ..create_command(&category, &genre, &cast_member)
    };
    let harness = create_harness(vec![category], vec![], vec![cast_member], vec![]);

    let result = harness.command_service.handle_create(command).await;

    match result {
        Err(CatalogDomainError::EntityValidation(error)) => {
            assert!(error.field_errors("title").is_some());
            assert_eq!(
                error.field_errors("rating"),
                Some(
                    &["The rating must be one of the following values: L, 10, 12, 14, 16, 18, passed value: 99".to_string()][..]
                )
            );
            assert_eq!(
                error.field_errors("genres_id"),
                Some(&[format!("Genre Not Found using ID {MISSING_ID}")][..])
            );
            assert!(error.field_errors("categories_id").is_none());
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(harness.unit_of_work.run_calls(), 0);
}

#[tokio::test]
async fn handle_update_changes_rating_and_replaces_cast() {
    let category = category_named("Movie");
    let genre = genre_named("Action", &[&category]);
    let first = cast_member_named("Jane");
    let second = cast_member_named("John");
    let existing = video_titled("Old", &[&genre], 1);
    let video_id = existing.video_id().to_string();
    let harness = create_harness(
        vec![category],
        vec![genre.clone()],
        vec![first, second.clone()],
        vec![existing],
    );

    let command = UpdateVideoCommand::new(
        video_id,
        UpdateVideoChanges {
            rating: Some("18".to_string()),
            cast_members_id: Some(vec![second.cast_member_id().to_string()]),
            ..Default::default()
        },
    )
    .expect("valid command");
    let updated = harness
        .command_service
        .handle_update(command)
        .await
        .expect("update should succeed");

    assert_eq!(updated.title(), "Old");
    assert_eq!(updated.rating(), Rating::Age18);
    assert_eq!(updated.cast_members_id(), &[*second.cast_member_id()]);
    assert_eq!(updated.genres_id(), &[*genre.genre_id()]);
}

#[tokio::test]
async fn handle_update_with_invalid_rating_keeps_stored_video() {
    let existing = video_titled("Old", &[], 1);
    let video_id = existing.video_id().to_string();
    let harness = create_harness(vec![], vec![], vec![], vec![existing.clone()]);

    let command = UpdateVideoCommand::new(
        video_id,
        UpdateVideoChanges {
            rating: Some("X".to_string()),
            ..Default::default()
        },
    )
    .expect("valid command");
    let result = harness.command_service.handle_update(command).await;

    assert!(matches!(result, Err(CatalogDomainError::EntityValidation(_))));
    let stored = harness
        .video_repository
        .find_by_id(existing.video_id())
        .await
        .expect("find_by_id")
        .expect("video stored");
    assert_eq!(stored.rating(), Rating::Age12);
    assert_eq!(harness.unit_of_work.run_calls(), 0);
}

#[tokio::test]
async fn handle_delete_of_unknown_video_is_not_found() {
    let harness = create_harness(vec![], vec![], vec![], vec![]);

    let result = harness
        .command_service
        .handle_delete(DeleteVideoCommand::new(MISSING_ID.to_string()).expect("valid id"))
        .await;

    match result {
        Err(CatalogDomainError::NotFound(error)) => assert_eq!(
            error.to_string(),
            format!("Video Not Found using ID {MISSING_ID}")
        ),
        other => panic!("expected not found, got {other:?}"),
    }
}
