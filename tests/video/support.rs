#[path = "support/harness.rs"]
pub mod harness;

pub use fixtures::{
    MISSING_ID, cast_member_named, category_named, create_command, genre_named, video_titled,
};
pub use harness::{VideoTestHarness, create_harness};
