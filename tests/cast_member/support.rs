#[path = "support/fixtures.rs"]
pub mod fixtures;

pub use fixtures::{MISSING_ID, cast_member_at};
pub use harness::create_harness;
