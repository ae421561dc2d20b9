use video_catalog_api::{
    cast_member::domain::model::value_objects::cast_member_id::CastMemberId,
    category::domain::model::value_objects::category_id::CategoryId,
    shared::domain::model::{either::Either, entities::entity::Entity},
    video::domain::model::{
        entities::video::{Video, VideoCreateProps},
        enums::rating::Rating,
    },
};

fn props() -> VideoCreateProps {
    VideoCreateProps {
        title: "Title".to_string(),
        description: "Description".to_string(),
        year_launched: 2000,
        duration: 100,
        rating: Rating::L,
        is_opened: false,
        categories_id: Vec::new(),
        genres_id: Vec::new(),
        cast_members_id: Vec::new(),
    }
}

#[test]
fn ratings_round_trip_through_their_codes() {
    for rating in Rating::ALL {
        assert_eq!(Rating::create(rating.as_str()), Either::Ok(rating));
    }
}

#[test]
fn unknown_rating_lists_allowed_values() {
    let message = Rating::create("21")
        .error()
        .map(ToString::to_string)
        .expect("21 is not a rating");

    assert_eq!(
        message,
        "The rating must be one of the following values: L, 10, 12, 14, 16, 18, passed value: 21"
    );
}

#[test]
fn new_videos_are_never_published_and_relations_are_deduped() {
    let category = CategoryId::new_random();
    let cast_member = CastMemberId::new_random();

    let video = Video::create(VideoCreateProps {
        categories_id: vec![category, category],
        cast_members_id: vec![cast_member],
        ..props()
    });

    assert!(!video.is_published());
    assert_eq!(video.categories_id(), &[category]);
    assert_eq!(video.cast_members_id(), &[cast_member]);
    assert!(!video.notification().has_errors());
}

#[test]
fn numeric_rules_are_checked() {
    let video = Video::create(VideoCreateProps {
        year_launched: 1700,
        duration: 0,
        ..props()
    });

    assert_eq!(
        video.notification().field_errors("year_launched"),
        Some(&["year_launched must not be less than 1888".to_string()][..])
    );
    assert_eq!(
        video.notification().field_errors("duration"),
        Some(&["duration must not be less than 1".to_string()][..])
    );
}

#[test]
fn mutators_revalidate_changed_fields() {
    let mut video = Video::create(props());

    video.change_title(String::new());
    video.change_year_launched(10000);
    video.change_rating(Rating::Age18);
    video.mark_as_opened();

    assert_eq!(video.rating(), Rating::Age18);
    assert!(video.is_opened());
    assert!(video.notification().field_errors("title").is_some());
    assert_eq!(
        video.notification().field_errors("year_launched"),
        Some(&["year_launched must not be greater than 9999".to_string()][..])
    );
}
