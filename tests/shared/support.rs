#[path = "support/fakes.rs"]
pub mod fakes;
#[path = "support/harness.rs"]
pub mod harness;

pub use fixtures::{category_created_minutes_ago, named_categories};
pub use harness::{spy_repository, standard_repository};
