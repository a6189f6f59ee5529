// Test case - one scenario execution and its report document

use crate::model::{Link, Status, Step};
use serde::Serialize;
use std::backtrace::Backtrace;
use uuid::Uuid;

/// Key/value fact attached to a test case for the viewer's grouping and
/// filtering. Duplicates are allowed and preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub name: String,
    pub value: String,
}

/// Failure detail block, populated only when a scenario fails.
#[derive(Debug, Clone, Serialize)]
pub struct StatusDetails {
    pub known: bool,
    pub muted: bool,
    pub flaky: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub trace: String,
}

/// One scenario execution. Owns its steps and labels by value; the run
/// container only ever records this case's uuid.
#[derive(Debug, Clone, Serialize)]
pub struct TestCase {
    pub uuid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "fullName", skip_serializing_if = "String::is_empty")]
    pub full_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(rename = "statusDetails", skip_serializing_if = "Option::is_none")]
    pub status_details: Option<StatusDetails>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stage: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    pub start: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<i64>,
}

impl TestCase {
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        description: impl Into<String>,
        start_ms: i64,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4().to_string(),
            name: name.into(),
            full_name: full_name.into(),
            description: description.into(),
            status: None,
            status_details: None,
            stage: String::new(),
            steps: Vec::new(),
            labels: Vec::new(),
            links: Vec::new(),
            start: start_ms,
            stop: None,
        }
    }

    /// Append a finished step snapshot to the document.
    pub fn add_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Close the test case with its final status. A second call is a no-op.
    pub fn finish(&mut self, status: Status, stop_ms: i64) {
        if self.stop.is_some() {
            return;
        }
        self.status = Some(status);
        self.stage = "finished".to_string();
        self.stop = Some(stop_ms);
    }

    pub fn is_finished(&self) -> bool {
        self.stop.is_some()
    }

    /// Record the failure message together with a best-effort backtrace of
    /// the reporting thread. The trace may be empty when backtraces are
    /// disabled on the platform.
    pub fn attach_error(&mut self, message: impl Into<String>) {
        let trace = match Backtrace::force_capture().to_string() {
            t if t == "disabled backtrace" || t == "unsupported backtrace" => String::new(),
            t => t,
        };

        self.status_details = Some(StatusDetails {
            known: false,
            muted: false,
            flaky: false,
            message: message.into(),
            trace,
        });
    }

    pub fn add_label(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.labels.push(Label {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn add_labels(&mut self, labels: Vec<Label>) {
        self.labels.extend(labels);
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }
}
