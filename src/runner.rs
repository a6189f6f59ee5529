// Runner module - input shapes supplied by the BDD test runner
// All of these are read-only from the formatter's point of view.

/// Feature metadata from a parsed Gherkin document.
#[derive(Debug, Clone, Default)]
pub struct Feature {
    pub name: String,
    pub description: String,
}

/// A resolved, parameter-substituted scenario example.
#[derive(Debug, Clone)]
pub struct Pickle {
    /// Source location of the feature file.
    pub uri: String,
    pub name: String,
    /// Raw tag strings, e.g. `@severity:critical`.
    pub tags: Vec<String>,
    /// The full ordered step list. The formatter uses it only to detect
    /// the scenario's last step by id.
    pub steps: Vec<PickleStep>,
}

/// One step of a pickle.
#[derive(Debug, Clone)]
pub struct PickleStep {
    /// Runner-assigned identifier, unique within the pickle.
    pub id: String,
    pub text: String,
    pub argument: Option<StepArgument>,
}

/// Structured block attached to a step, if any.
#[derive(Debug, Clone)]
pub enum StepArgument {
    /// Free-text block (Gherkin doc string).
    DocString(String),
    /// Tabular data; row 0 is the header row.
    DataTable(Vec<Vec<String>>),
}

impl Pickle {
    /// Whether `step` is the final step of this pickle, by id.
    pub fn is_last_step(&self, step: &PickleStep) -> bool {
        self.steps.last().is_some_and(|last| last.id == step.id)
    }
}
