// Run container - the run-level record linking all test case ids of one run

use crate::model::TestCase;
use serde::Serialize;
use uuid::Uuid;

/// One execution of an entire suite. Does not own its test cases, only
/// records their identifiers in arrival order.
#[derive(Debug, Clone, Serialize)]
pub struct Container {
    pub uuid: String,
    pub name: String,
    pub children: Vec<String>,
    pub start: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<i64>,
}

impl Container {
    /// Create a fresh container with a new identity.
    pub fn new(start_ms: i64) -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            name: String::new(),
            children: Vec::new(),
            start: start_ms,
            stop: None,
        }
    }

    /// Register a test case as a child of this run.
    pub fn add_child(&mut self, test_case: &TestCase) {
        self.children.push(test_case.uuid.clone());
    }

    /// Close the container. A second call is a no-op.
    pub fn finish(&mut self, stop_ms: i64) {
        if self.stop.is_none() {
            self.stop = Some(stop_ms);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.stop.is_some()
    }
}
