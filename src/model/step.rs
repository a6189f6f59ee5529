// Step - one action line within a scenario

use crate::model::Status;
use serde::Serialize;

/// Named value shown next to a step in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

/// One step execution. The `steps` field exists for format compatibility
/// with nested sub-steps; this crate only ever emits a flat list.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    pub stage: String,
    pub steps: Vec<Step>,
    pub parameters: Vec<Parameter>,
    pub start: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<i64>,
}

impl Step {
    pub fn new(name: impl Into<String>, start_ms: i64) -> Self {
        Self {
            name: name.into(),
            status: None,
            stage: String::new(),
            steps: Vec::new(),
            parameters: Vec::new(),
            start: start_ms,
            stop: None,
        }
    }

    /// Attach a parameter. `None` is silently ignored so callers can feed
    /// the translator output straight in.
    pub fn add_param(&mut self, param: Option<Parameter>) {
        if let Some(param) = param {
            self.parameters.push(param);
        }
    }

    /// Close the step with its final status. A second call is a no-op.
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_new() {
        let step = Step::new("Given a user", 5);
        assert_eq!(step.name, "Given a user");
        assert_eq!(step.start, 5);
        assert!(step.status.is_none());
        assert!(step.stage.is_empty());
        assert!(step.parameters.is_empty());
    }

    #[test]
    fn test_step_add_param_none_is_ignored() {
        let mut step = Step::new("When", 0);
        step.add_param(None);
        assert!(step.parameters.is_empty());
    }

    #[test]
    fn test_step_add_param_some() {
        let mut step = Step::new("When", 0);
        step.add_param(Some(Parameter {
            name: "Message".to_string(),
            value: "hello".to_string(),
        }));
        assert_eq!(step.parameters.len(), 1);
        assert_eq!(step.parameters[0].name, "Message");
    }

    #[test]
    fn test_step_finish_sets_terminal_state() {
        let mut step = Step::new("Then", 1);
        step.finish(Status::Passed, 2);

        assert_eq!(step.status, Some(Status::Passed));
        assert_eq!(step.stage, "finished");
        assert_eq!(step.stop, Some(2));
    }

    #[test]
    fn test_step_finish_is_idempotent() {
        let mut step = Step::new("Then", 1);
        step.finish(Status::Failed, 2);
        step.finish(Status::Passed, 9);

        assert_eq!(step.status, Some(Status::Failed));
        assert_eq!(step.stop, Some(2));
    }
}
