// Model module - Allure document value types
// Lifecycle: construct with a start timestamp, mutate while open, finish once

pub mod container;
pub mod link;
pub mod status;
pub mod step;
pub mod testcase;

pub use container::Container;
pub use link::{Link, LinkType};
pub use status::Status;
pub use step::{Parameter, Step};
pub use testcase::{Label, StatusDetails, TestCase};
