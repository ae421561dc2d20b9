#[path = "support/fakes.rs"]
pub mod fakes;
#[path = "support/harness.rs"]
pub mod harness;

pub use fixtures::{MISSING_ID, category_named, create_command};
pub use harness::{create_harness, create_unavailable_harness};
