// Formatter module - event-driven projection of runner callbacks into
// Allure documents.
//
// The runner drives this type through the callback methods below, one
// scenario at a time, in execution order. That ordering is a precondition:
// the formatter holds a single current feature/scenario/step and is not
// safe to feed from interleaved scenarios or multiple threads. A parallel
// runner needs one formatter per in-flight scenario plus a serialized
// writer.

use crate::error::FormatterError;
use crate::model::{Container, Status, Step, TestCase};
use crate::runner::{Feature, Pickle, PickleStep};
use crate::time::{Clock, SystemClock};
use crate::translate::{step_argument_to_parameter, tags_to_labels};
use crate::writer::ResultsWriter;
use std::collections::HashMap;
use tracing::debug;

/// Allure report formatter for a Gherkin-style BDD runner.
///
/// Tracks the run container, the scenario in flight and the step in flight,
/// finishes each document exactly once and flushes it through the
/// [`ResultsWriter`] port. Any write failure is fatal and propagates
/// immediately; nothing is retried.
pub struct AllureFormatter<W: ResultsWriter> {
    writer: W,
    suite_name: String,
    tag_label_mapping: HashMap<String, String>,
    clock: Box<dyn Clock>,
    container: Option<Container>,
    current_feature: Option<Feature>,
    current_scenario: Option<TestCase>,
    current_step: Option<Step>,
}

impl<W: ResultsWriter> AllureFormatter<W> {
    /// Create a formatter with an empty suite name and tag mapping.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            suite_name: String::new(),
            tag_label_mapping: HashMap::new(),
            clock: Box::new(SystemClock),
            container: None,
            current_feature: None,
            current_scenario: None,
            current_step: None,
        }
    }

    /// Suite name stamped into every test case as a "suite" label.
    #[must_use]
    pub fn with_suite_name(mut self, suite_name: impl Into<String>) -> Self {
        self.suite_name = suite_name.into();
        self
    }

    /// Tag key to label name table used when translating `@key:value` tags.
    #[must_use]
    pub fn with_tag_label_mapping(mut self, mapping: HashMap<String, String>) -> Self {
        self.tag_label_mapping = mapping;
        self
    }

    /// Replace the wall clock, mainly for deterministic tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The open run container, if the run has started.
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    /// The run has started: prepare the output location and open the
    /// container.
    pub fn run_started(&mut self) -> Result<(), FormatterError> {
        self.writer.init()?;
        self.container = Some(Container::new(self.clock.unix_millis()));
        debug!("run started, container opened");
        Ok(())
    }

    /// A feature file has been parsed. Replaces the current feature
    /// metadata; does not touch any open scenario.
    pub fn feature_parsed(&mut self, feature: Feature) {
        self.current_feature = Some(feature);
    }

    /// A scenario has been picked for execution.
    pub fn scenario_picked(&mut self, pickle: &Pickle) -> Result<(), FormatterError> {
        let feature = self
            .current_feature
            .as_ref()
            .ok_or(FormatterError::NoOpenFeature("scenario_picked"))?;
        let container = self
            .container
            .as_mut()
            .ok_or(FormatterError::NoOpenRun("scenario_picked"))?;

        let full_name = format!("{}:{}", pickle.uri, pickle.name);
        let mut test_case = TestCase::new(
            &pickle.name,
            full_name,
            &feature.description,
            self.clock.unix_millis(),
        );

        test_case.add_label("feature", &feature.name);
        test_case.add_label("suite", &self.suite_name);
        test_case.add_labels(tags_to_labels(&pickle.tags, &self.tag_label_mapping));

        container.add_child(&test_case);
        self.current_scenario = Some(test_case);
        Ok(())
    }

    /// A step has been matched to a definition and is about to run.
    ///
    /// The step stays the single source of truth while open; it is appended
    /// to the scenario's step list only once it finishes, so recorded steps
    /// always carry their final status.
    pub fn step_defined(
        &mut self,
        _pickle: &Pickle,
        step: &PickleStep,
    ) -> Result<(), FormatterError> {
        if self.current_scenario.is_none() {
            return Err(FormatterError::NoOpenScenario("step_defined"));
        }

        let mut open_step = Step::new(&step.text, self.clock.unix_millis());
        open_step.add_param(step_argument_to_parameter(step.argument.as_ref()));
        self.current_step = Some(open_step);
        Ok(())
    }

    /// The step passed. Finishes the scenario only when this was its last
    /// step.
    pub fn step_passed(
        &mut self,
        pickle: &Pickle,
        step: &PickleStep,
    ) -> Result<(), FormatterError> {
        self.conclude_step("step_passed", Status::Passed)?;

        if pickle.is_last_step(step) {
            self.conclude_scenario(Status::Passed, None)?;
        }
        Ok(())
    }

    /// No definition matched the step. Terminal for the scenario regardless
    /// of the step's position.
    pub fn step_undefined(
        &mut self,
        _pickle: &Pickle,
        _step: &PickleStep,
    ) -> Result<(), FormatterError> {
        self.conclude_step("step_undefined", Status::Unknown)?;
        self.conclude_scenario(Status::Unknown, None)
    }

    /// The step failed. Terminal for the scenario; the error message and a
    /// best-effort backtrace end up in the document's status details.
    pub fn step_failed(
        &mut self,
        _pickle: &Pickle,
        _step: &PickleStep,
        message: &str,
    ) -> Result<(), FormatterError> {
        self.conclude_step("step_failed", Status::Failed)?;
        self.conclude_scenario(Status::Failed, Some(message))
    }

    /// The step is pending a definition body. The runner emits Skipped for
    /// every step after a pending one, so the scenario is only closed when
    /// this is the true last step.
    pub fn step_pending(
        &mut self,
        pickle: &Pickle,
        step: &PickleStep,
    ) -> Result<(), FormatterError> {
        self.conclude_step("step_pending", Status::Skipped)?;

        if pickle.is_last_step(step) {
            self.conclude_scenario(Status::Skipped, None)?;
        }
        Ok(())
    }

    /// The step was skipped, usually in the cascade after a pending or
    /// failed step.
    pub fn step_skipped(
        &mut self,
        pickle: &Pickle,
        step: &PickleStep,
    ) -> Result<(), FormatterError> {
        self.conclude_step("step_skipped", Status::Skipped)?;

        if pickle.is_last_step(step) {
            self.conclude_scenario(Status::Skipped, None)?;
        }
        Ok(())
    }

    /// The run is over: close the container and flush it. Terminal event.
    pub fn run_summary(&mut self) -> Result<(), FormatterError> {
        let container = self
            .container
            .as_mut()
            .ok_or(FormatterError::NoOpenRun("run_summary"))?;

        container.finish(self.clock.unix_millis());
        self.writer.write_container(container)?;
        debug!(children = container.children.len(), "run container flushed");
        Ok(())
    }

    /// Finish the open step and fold it into the scenario's step list.
    /// Steps concluding after the scenario was already flushed (the skip
    /// cascade behind a failure) are dropped.
    fn conclude_step(&mut self, event: &'static str, status: Status) -> Result<(), FormatterError> {
        let mut step = self
            .current_step
            .take()
            .ok_or(FormatterError::NoOpenStep(event))?;
        let scenario = self
            .current_scenario
            .as_mut()
            .ok_or(FormatterError::NoOpenScenario(event))?;

        step.finish(status, self.clock.unix_millis());
        if !scenario.is_finished() {
            scenario.add_step(step);
        }
        Ok(())
    }

    /// Finish the scenario in flight and flush it exactly once. A scenario
    /// that already reached a terminal status is left untouched.
    fn conclude_scenario(
        &mut self,
        status: Status,
        error_message: Option<&str>,
    ) -> Result<(), FormatterError> {
        let scenario = self
            .current_scenario
            .as_mut()
            .ok_or(FormatterError::NoOpenScenario("scenario finish"))?;

        if scenario.is_finished() {
            return Ok(());
        }

        scenario.finish(status, self.clock.unix_millis());
        if let Some(message) = error_message {
            scenario.attach_error(message);
        }

        self.writer.write_test_case(scenario)?;
        debug!(name = %scenario.name, status = ?status, "test case flushed");
        Ok(())
    }
}
