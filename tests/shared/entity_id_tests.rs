use video_catalog_api::{
    category::domain::model::value_objects::category_id::CategoryId,
    shared::domain::model::value_objects::entity_id::EntityId,
};

const HYPHENATED: &str = "88ff2587-ce5a-4769-a8c6-1d63d29c5f7a";

#[test]
fn parse_accepts_hyphenated_uuids() {
    let id = CategoryId::parse(HYPHENATED).expect("hyphenated uuid");

    assert_eq!(id.to_string(), HYPHENATED);
}

#[test]
fn parse_rejects_other_uuid_spellings() {
    let rejected = [
        "88ff2587ce5a4769a8c61d63d29c5f7a",
        "{88ff2587-ce5a-4769-a8c6-1d63d29c5f7a}",
        "urn:uuid:88ff2587-ce5a-4769-a8c6-1d63d29c5f7a",
        "88ff2587-ce5a-4769-a8c6-1d63d29c5f7",
        "88ff2587-ce5a-4769-a8c6-1d63d29c5f7z",
        "",
    ];

    for raw in rejected {
        let error = CategoryId::parse(raw).expect_err("not a hyphenated uuid");
        assert_eq!(error.to_string(), format!("ID must be a valid UUID: {raw}"));
    }
}
