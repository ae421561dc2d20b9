use serde_json::json;
use video_catalog_api::{
    cast_member::domain::{
        model::{
            enums::cast_member_type::CastMemberType,
            queries::{
                get_cast_member_query::GetCastMemberQuery,
                list_cast_members_query::ListCastMembersQuery,
            },
        },
        services::cast_member_query_service::CastMemberQueryService,
    },
    shared::domain::model::{
        enums::catalog_domain_error::CatalogDomainError,
        queries::search_params::SearchParamsInput,
    },
};

use crate::support::{MISSING_ID, cast_member_at, create_harness, fixtures::minutes_ago};

#[tokio::test]
async fn name_filter_is_case_insensitive_and_keeps_insertion_order() {
    let created_at = minutes_ago(1);
    let harness = create_harness(vec![
        cast_member_at("test", CastMemberType::Actor, created_at),
        cast_member_at("TEST", CastMemberType::Director, created_at),
        cast_member_at("fake", CastMemberType::Actor, created_at),
    ]);

    let query = ListCastMembersQuery::new(SearchParamsInput::default().filter(json!({"name": "TEST"})))
        .expect("valid filter");
    let result = harness
        .query_service
        .handle_list(query)
        .await
        .expect("list should succeed");

    let names = result.items().iter().map(|item| item.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["test", "TEST"]);
}

#[tokio::test]
async fn type_filter_combines_with_name_filter() {
    let harness = create_harness(vec![
        cast_member_at("actor a", CastMemberType::Actor, minutes_ago(3)),
        cast_member_at("director a", CastMemberType::Director, minutes_ago(2)),
        cast_member_at("actor b", CastMemberType::Actor, minutes_ago(1)),
    ]);

    let query = ListCastMembersQuery::new(
        SearchParamsInput::default().filter(json!({"name": "a", "type": "2"})),
    )
    .expect("valid filter");
    let result = harness
        .query_service
        .handle_list(query)
        .await
        .expect("list should succeed");

    let names = result.items().iter().map(|item| item.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["actor b", "actor a"]);
}

#[test]
fn unknown_type_filter_is_a_search_validation_error() {
    let error = ListCastMembersQuery::new(SearchParamsInput::default().filter(json!({"type": "x"})))
        .expect_err("type x is invalid");

    assert_eq!(
        error.field_errors("type"),
        Some(&["Invalid cast member type: x".to_string()][..])
    );
    let domain: CatalogDomainError = error.into();
    assert!(matches!(domain, CatalogDomainError::SearchValidation(_)));
}

#[tokio::test]
async fn handle_get_of_unknown_id_is_not_found() {
    let harness = create_harness(vec![]);

    let result = harness
        .query_service
        .handle_get(GetCastMemberQuery::new(MISSING_ID.to_string()).expect("valid id"))
        .await;

    assert!(matches!(result, Err(CatalogDomainError::NotFound(_))));
}

#[tokio::test]
async fn handle_list_falls_back_to_newest_first_for_unsortable_fields() {
    let harness = create_harness(vec![
        cast_member_at("b", CastMemberType::Actor, minutes_ago(2)),
        cast_member_at("a", CastMemberType::Director, minutes_ago(3)),
        cast_member_at("c", CastMemberType::Actor, minutes_ago(1)),
    ]);

    for sort in [None, Some("unsortable_field"), Some("type")] {
        let mut input = SearchParamsInput::default().sort_dir("asc");
        if let Some(sort) = sort {
            input = input.sort(sort);
        }
        let result = harness
            .query_service
            .handle_list(ListCastMembersQuery::new(input).expect("no filter"))
            .await
            .expect("list should succeed");

        let names = result.items().iter().map(|item| item.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["c", "b", "a"], "sort {sort:?}");
    }
}
