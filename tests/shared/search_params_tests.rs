use serde_json::{Value, json};
use video_catalog_api::shared::domain::model::queries::search_params::{
    MAX_PAGING_VALUE, SearchParams, SearchParamsInput, SortDirection,
};

fn params(input: SearchParamsInput) -> SearchParams {
    SearchParams::create(input)
}

#[test]
fn defaults_apply_when_nothing_is_given() {
    let search = params(SearchParamsInput::default());

    assert_eq!(search.page(), 1);
    assert_eq!(search.per_page(), 15);
    assert_eq!(search.sort(), None);
    assert_eq!(search.sort_dir(), None);
    assert_eq!(search.filter(), None);
    assert_eq!(search.offset(), 0);
}

#[test]
fn page_falls_back_to_first_page_for_invalid_values() {
    let invalid = [
        json!(-1),
        json!(0),
        json!(1.5),
        json!("fake"),
        json!(""),
        json!(true),
        json!([]),
        json!({}),
        Value::Null,
    ];

    for value in invalid {
        let search = params(SearchParamsInput::default().page(value.clone()));
        assert_eq!(search.page(), 1, "page for {value}");
    }

    assert_eq!(params(SearchParamsInput::default().page(2)).page(), 2);
    assert_eq!(params(SearchParamsInput::default().page("2")).page(), 2);
}

#[test]
fn per_page_falls_back_to_default_for_invalid_values() {
    assert_eq!(params(SearchParamsInput::default().per_page(0)).per_page(), 15);
    assert_eq!(params(SearchParamsInput::default().per_page(-3)).per_page(), 15);
    assert_eq!(params(SearchParamsInput::default().per_page(5.5)).per_page(), 15);
    assert_eq!(params(SearchParamsInput::default().per_page("abc")).per_page(), 15);
    assert_eq!(params(SearchParamsInput::default().per_page(10)).per_page(), 10);
    assert_eq!(params(SearchParamsInput::default().per_page("20")).per_page(), 20);
}

#[test]
fn sort_is_stringified_and_empty_sort_is_ignored() {
    assert_eq!(params(SearchParamsInput::default().sort("")).sort(), None);
    assert_eq!(params(SearchParamsInput::default().sort(Value::Null)).sort(), None);
    assert_eq!(params(SearchParamsInput::default().sort("name")).sort(), Some("name"));
    assert_eq!(params(SearchParamsInput::default().sort(5)).sort(), Some("5"));
}

#[test]
fn sort_dir_is_only_kept_together_with_sort() {
    let without_sort = params(SearchParamsInput::default().sort_dir("desc"));
    assert_eq!(without_sort.sort_dir(), None);

    let cases = [
        ("asc", SortDirection::Asc),
        ("ASC", SortDirection::Asc),
        ("desc", SortDirection::Desc),
        ("DESC", SortDirection::Desc),
        ("sideways", SortDirection::Asc),
    ];
    for (raw, expected) in cases {
        let search = params(SearchParamsInput::default().sort("name").sort_dir(raw));
        assert_eq!(search.sort_dir(), Some(expected), "sort_dir for {raw}");
    }

    let missing_dir = params(SearchParamsInput::default().sort("name"));
    assert_eq!(missing_dir.sort_dir(), Some(SortDirection::Asc));
}

#[test]
fn filter_is_stringified_and_empty_filter_is_ignored() {
    assert_eq!(params(SearchParamsInput::default().filter("")).filter(), None);
    assert_eq!(params(SearchParamsInput::default().filter(Value::Null)).filter(), None);
    assert_eq!(
        params(SearchParamsInput::default().filter("test")).filter(),
        Some(&"test".to_string())
    );
    assert_eq!(
        params(SearchParamsInput::default().filter(10)).filter(),
        Some(&"10".to_string())
    );
}

#[test]
fn offset_follows_page_and_per_page() {
    let search = params(SearchParamsInput::default().page(3).per_page(20));

    assert_eq!(search.offset(), 40);
}

#[test]
fn huge_paging_values_stay_bindable_as_signed_integers() {
    let cases = [
        SearchParamsInput::default().per_page(1e20),
        SearchParamsInput::default().page("100000000000000000000"),
        SearchParamsInput::default().page(1e20).per_page(1e20),
        SearchParamsInput::default().page(u64::MAX).per_page(2),
    ];

    for input in cases {
        let search = params(input);

        assert!(search.page() >= 1);
        assert!(i64::try_from(search.page()).is_ok());
        assert!(i64::try_from(search.per_page()).is_ok());
        assert!(i64::try_from(search.offset()).is_ok());
    }

    let huge = params(SearchParamsInput::default().per_page(1e20));
    assert_eq!(huge.per_page(), MAX_PAGING_VALUE);
    assert_eq!(huge.offset(), 0);
}

#[test]
fn raw_input_deserializes_from_json() {
    let input: SearchParamsInput = serde_json::from_value(json!({
        "page": "4",
        "per_page": 2,
        "sort": "name",
        "sort_dir": "desc"
    }))
    .expect("valid search input");

    let search = params(input);

    assert_eq!(search.page(), 4);
    assert_eq!(search.per_page(), 2);
    assert_eq!(search.sort(), Some("name"));
    assert_eq!(search.sort_dir(), Some(SortDirection::Desc));
}
