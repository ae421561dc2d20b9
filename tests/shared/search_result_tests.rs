use serde_json::json;
use video_catalog_api::shared::domain::model::queries::search_result::SearchResult;

#[test]
fn last_page_rounds_up() {
    let result = SearchResult::new(vec!["a"; 20], 101, 1, 20);

    assert_eq!(result.last_page(), 6);
}

#[test]
fn last_page_is_at_least_one() {
    assert_eq!(SearchResult::<u8>::new(vec![], 0, 1, 15).last_page(), 1);
    assert_eq!(SearchResult::new(vec![1, 2, 3, 4], 4, 1, 15).last_page(), 1);
}

#[test]
fn exact_multiple_does_not_add_a_page() {
    let result = SearchResult::new(vec![1, 2], 4, 2, 2);

    assert_eq!(result.last_page(), 2);
}

#[test]
fn map_keeps_paging_metadata() {
    let result = SearchResult::new(vec![1, 2], 5, 2, 2).map(|value| value * 10);

    assert_eq!(result.items(), &[10, 20]);
    assert_eq!(result.total(), 5);
    assert_eq!(result.current_page(), 2);
    assert_eq!(result.per_page(), 2);
    assert_eq!(result.last_page(), 3);
}

#[test]
fn serializes_every_field() {
    let result = SearchResult::new(vec!["x"], 1, 1, 15);

    assert_eq!(
        serde_json::to_value(&result).expect("serializable result"),
        json!({
            "items": ["x"],
            "total": 1,
            "current_page": 1,
            "per_page": 15,
            "last_page": 1
        })
    );
}
