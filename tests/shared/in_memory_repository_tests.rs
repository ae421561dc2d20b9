use video_catalog_api::{
    category::domain::model::{entities::category::Category, value_objects::category_id::CategoryId},
    shared::{
        domain::model::{
            entities::entity::Entity,
            enums::catalog_domain_error::CatalogDomainError,
            queries::search_params::{SearchParams, SearchParamsInput},
        },
        infrastructure::persistence::repositories::searchable_repository::{
            Repository, SearchableRepository,
        },
    },
};

use crate::support::{named_categories, spy_repository, standard_repository};

const MISSING_ID: &str = "88ff2587-ce5a-4769-a8c6-1d63d29c5f7a";

fn names(items: &[Category]) -> Vec<&str> {
    items.iter().map(Category::name).collect()
}

#[tokio::test]
async fn search_without_filter_never_calls_the_filter_predicate() {
    let repository = spy_repository(named_categories(&["a", "b", "c"]));

    let result = repository
        .search(&SearchParams::create(SearchParamsInput::default()))
        .await
        .expect("search should succeed");

    assert_eq!(result.total(), 3);
    assert_eq!(repository.policy().match_calls(), 0);
}

#[tokio::test]
async fn search_with_filter_checks_every_item() {
    let repository = spy_repository(named_categories(&["a", "b", "c"]));

    let result = repository
        .search(&SearchParams::create(SearchParamsInput::default().filter("b")))
        .await
        .expect("search should succeed");

    assert_eq!(names(result.items()), vec!["b"]);
    assert_eq!(repository.policy().match_calls(), 3);
}

#[tokio::test]
async fn filter_is_case_insensitive_and_keeps_relative_order() {
    let mut items = named_categories(&["test", "TEST", "fake"]);
    let created_at = items[0].created_at();
    items = items
        .into_iter()
        .map(|category| {
            Category::restore(
                *category.category_id(),
                category.name().to_string(),
                None,
                true,
                created_at,
            )
        })
        .collect();
    let repository = standard_repository(items);

    let result = repository
        .search(&SearchParams::create(SearchParamsInput::default().filter("TEST")))
        .await
        .expect("search should succeed");

    assert_eq!(names(result.items()), vec!["test", "TEST"]);
    assert_eq!(result.total(), 2);
}

#[tokio::test]
async fn missing_or_unknown_sort_orders_by_newest_first() {
    let repository = standard_repository(named_categories(&["oldest", "middle", "newest"]));

    let unsorted = repository
        .search(&SearchParams::create(SearchParamsInput::default()))
        .await
        .expect("search should succeed");
    let unknown = repository
        .search(&SearchParams::create(
            SearchParamsInput::default().sort("description"),
        ))
        .await
        .expect("search should succeed");

    assert_eq!(names(unsorted.items()), vec!["newest", "middle", "oldest"]);
    assert_eq!(names(unknown.items()), names(unsorted.items()));
}

#[tokio::test]
async fn sorted_pages_walk_through_every_item() {
    let repository = standard_repository(named_categories(&["b", "a", "d", "e", "c"]));
    let page = |number: i32| {
        SearchParams::create(
            SearchParamsInput::default()
                .page(number)
                .per_page(2)
                .sort("name"),
        )
    };

    let first = repository.search(&page(1)).await.expect("page 1");
    let second = repository.search(&page(2)).await.expect("page 2");
    let third = repository.search(&page(3)).await.expect("page 3");

    assert_eq!(names(first.items()), vec!["a", "b"]);
    assert_eq!(names(second.items()), vec!["c", "d"]);
    assert_eq!(names(third.items()), vec!["e"]);
    assert_eq!(third.total(), 5);
    assert_eq!(third.last_page(), 3);
}

#[tokio::test]
async fn descending_sort_reverses_order() {
    let repository = standard_repository(named_categories(&["b", "a", "c"]));

    let result = repository
        .search(&SearchParams::create(
            SearchParamsInput::default().sort("name").sort_dir("desc"),
        ))
        .await
        .expect("search should succeed");

    assert_eq!(names(result.items()), vec!["c", "b", "a"]);
}

#[tokio::test]
async fn filter_counts_before_paginating() {
    let repository = standard_repository(named_categories(&["test a", "test b", "other", "test c"]));

    let result = repository
        .search(&SearchParams::create(
            SearchParamsInput::default()
                .filter("test")
                .per_page(2)
                .sort("name"),
        ))
        .await
        .expect("search should succeed");

    assert_eq!(names(result.items()), vec!["test a", "test b"]);
    assert_eq!(result.total(), 3);
    assert_eq!(result.last_page(), 2);
}

#[tokio::test]
async fn exists_by_id_partitions_present_and_missing_ids() {
    let items = named_categories(&["a", "b"]);
    let present = items.iter().map(|item| *item.category_id()).collect::<Vec<_>>();
    let absent = vec![CategoryId::new_random(), CategoryId::new_random(), CategoryId::new_random()];
    let repository = standard_repository(items);

    let mut query = present.clone();
    query.extend(absent.iter().copied());
    let partition = repository.exists_by_id(&query).await.expect("exists_by_id");

    assert_eq!(partition.exists, present);
    assert_eq!(partition.not_exists, absent);
}

#[tokio::test]
async fn exists_by_id_with_no_ids_is_empty() {
    let repository = standard_repository(named_categories(&["a"]));

    let partition = repository.exists_by_id(&[]).await.expect("exists_by_id");

    assert!(partition.exists.is_empty());
    assert!(partition.not_exists.is_empty());
}

#[tokio::test]
async fn delete_of_unknown_id_reports_entity_and_id() {
    let repository = standard_repository(vec![]);
    let missing = CategoryId::new(MISSING_ID.to_string()).expect("valid uuid");

    let result = repository.delete(&missing).await;

    match result {
        Err(CatalogDomainError::NotFound(error)) => assert_eq!(
            error.to_string(),
            format!("Category Not Found using ID {MISSING_ID}")
        ),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn update_of_unknown_entity_is_not_found() {
    let repository = standard_repository(vec![]);
    let category = named_categories(&["ghost"]).remove(0);

    let result = repository.update(&category).await;

    assert!(matches!(result, Err(CatalogDomainError::NotFound(_))));
}

#[tokio::test]
async fn insert_does_not_reject_duplicate_ids() {
    let repository = standard_repository(vec![]);
    let category = named_categories(&["twice"]).remove(0);

    repository.insert(&category).await.expect("first insert");
    repository.insert(&category).await.expect("second insert");

    assert_eq!(repository.find_all().await.expect("find_all").len(), 2);
}

#[tokio::test]
async fn find_by_ids_returns_only_known_entities() {
    let items = named_categories(&["a", "b", "c"]);
    let wanted = vec![*items[0].category_id(), CategoryId::new_random(), *items[2].category_id()];
    let repository = standard_repository(items);

    let found = repository.find_by_ids(&wanted).await.expect("find_by_ids");

    assert_eq!(names(&found), vec!["a", "c"]);
}

#[tokio::test]
async fn bulk_insert_then_find_by_id() {
    let items = named_categories(&["a", "b"]);
    let target = *items[1].category_id();
    let repository = standard_repository(vec![]);

    repository.bulk_insert(&items).await.expect("bulk insert");
    let found = repository.find_by_id(&target).await.expect("find_by_id");

    assert_eq!(found.map(|category| category.name().to_string()), Some("b".to_string()));
}
