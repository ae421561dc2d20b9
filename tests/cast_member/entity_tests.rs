use video_catalog_api::{
    cast_member::domain::model::{
        entities::cast_member::{CastMember, CastMemberCreateProps},
        enums::cast_member_type::CastMemberType,
    },
    shared::domain::model::{either::Either, entities::entity::Entity},
};

#[test]
fn type_codes_map_to_variants() {
    assert_eq!(CastMemberType::create(1), Either::Ok(CastMemberType::Director));
    assert_eq!(CastMemberType::create(2), Either::Ok(CastMemberType::Actor));
    assert_eq!(CastMemberType::Actor.value(), 2);
    assert_eq!(CastMemberType::parse(" 1 "), Either::Ok(CastMemberType::Director));
}

#[test]
fn unknown_type_code_fails_with_message() {
    let error = CastMemberType::create(3)
        .error()
        .map(ToString::to_string)
        .expect("type 3 is unknown");

    assert_eq!(error, "Invalid cast member type: 3");
    assert!(CastMemberType::parse("actor").is_fail());
}

#[test]
fn create_validates_name() {
    let cast_member = CastMember::create(CastMemberCreateProps {
        name: "n".repeat(256),
        cast_member_type: CastMemberType::Actor,
    });

    assert_eq!(
        cast_member.notification().field_errors("name"),
        Some(&["name must be shorter than or equal to 255 characters".to_string()][..])
    );
}

#[test]
fn change_name_revalidates_only_name() {
    let mut cast_member = CastMember::create(CastMemberCreateProps {
        name: "Jane".to_string(),
        cast_member_type: CastMemberType::Director,
    });

    cast_member.change_name(String::new());
    cast_member.change_type(CastMemberType::Actor);

    assert_eq!(cast_member.cast_member_type(), CastMemberType::Actor);
    assert_eq!(
        cast_member.notification().field_errors("name"),
        Some(&["name should not be empty".to_string()][..])
    );
}
