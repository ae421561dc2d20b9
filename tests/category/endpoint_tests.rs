use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use video_catalog_api::{
    category::interfaces::rest::{
        controllers::category_rest_controller::{
            create_category, delete_category, get_category, list_categories, update_category,
        },
        resources::{
            create_category_request_resource::CreateCategoryRequestResource,
            update_category_request_resource::UpdateCategoryRequestResource,
        },
    },
    shared::interfaces::rest::resources::search_query_resource::SearchQueryResource,
};

use crate::support::{MISSING_ID, category_named, create_harness, create_unavailable_harness};

#[tokio::test]
async fn create_returns_created_resource() {
    let harness = create_harness(vec![]);

    let (status, Json(resource)) = create_category(
        State(harness.state()),
        Json(CreateCategoryRequestResource {
            name: "Horror".to_string(),
            description: None,
            is_active: None,
        }),
    )
    .await
    .expect("create should succeed");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resource.name, "Horror");
    assert!(resource.is_active);
}

#[tokio::test]
async fn create_with_invalid_name_is_unprocessable() {
    let harness = create_harness(vec![]);

    let result = create_category(
        State(harness.state()),
        Json(CreateCategoryRequestResource {
            name: String::new(),
            description: None,
            is_active: None,
        }),
    )
    .await;

    match result {
        Err((status, Json(body))) => {
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(
                body.errors,
                Some(serde_json::json!([{"name": ["name should not be empty"]}]))
            );
        }
        Ok(_) => panic!("expected validation failure"),
    }
}

#[tokio::test]
async fn get_with_malformed_id_is_bad_request() {
    let harness = create_harness(vec![]);

    let result = get_category(State(harness.state()), Path("nope".to_string())).await;

    assert!(matches!(result, Err((StatusCode::BAD_REQUEST, _))));
}

#[tokio::test]
async fn update_and_delete_unknown_category_are_not_found() {
    let harness = create_harness(vec![]);

    let update = update_category(
        State(harness.state()),
        Path(MISSING_ID.to_string()),
        Json(UpdateCategoryRequestResource::default()),
    )
    .await;
    let delete = delete_category(State(harness.state()), Path(MISSING_ID.to_string())).await;

    assert!(matches!(update, Err((StatusCode::NOT_FOUND, _))));
    assert!(matches!(delete, Err((StatusCode::NOT_FOUND, _))));
}

#[tokio::test]
async fn list_uses_query_string_paging() {
    let harness = create_harness(vec![
        category_named("a", 3),
        category_named("b", 2),
        category_named("c", 1),
    ]);

    let Json(collection) = list_categories(
        State(harness.state()),
        Query(SearchQueryResource {
            page: Some("2".to_string()),
            per_page: Some("2".to_string()),
            sort: Some("name".to_string()),
            ..Default::default()
        }),
    )
    .await
    .expect("list should succeed");

    let names = collection
        .data
        .iter()
        .map(|resource| resource.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["c"]);
    assert_eq!(collection.meta.total, 3);
    assert_eq!(collection.meta.last_page, 2);
}

#[tokio::test]
async fn storage_failures_are_internal_errors() {
    let state = create_unavailable_harness();

    let result = list_categories(State(state), Query(SearchQueryResource::default())).await;

    match result {
        Err((status, Json(body))) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body.message, "internal server error");
        }
        Ok(_) => panic!("expected failure"),
    }
}
