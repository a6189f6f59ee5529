// Allure result status values

use serde::Serialize;

/// Terminal status of a test case or step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Broken,
    Passed,
    Failed,
    Skipped,
    Unknown,
}
