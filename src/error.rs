// Error module - fatal formatter errors
// Persistence failures and out-of-order callbacks both abort the run; this
// is a reporting tool, losing report data beats silently truncating it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatterError {
    /// A scenario event arrived before any feature was parsed.
    #[error("received '{0}' before any feature was parsed")]
    NoOpenFeature(&'static str),

    /// A step event arrived with no scenario in flight.
    #[error("received '{0}' with no open scenario")]
    NoOpenScenario(&'static str),

    /// A step outcome event arrived with no step in flight.
    #[error("received '{0}' with no open step")]
    NoOpenStep(&'static str),

    /// An event that requires a started run arrived before run start.
    #[error("received '{0}' before the run was started")]
    NoOpenRun(&'static str),

    /// The persistence port failed; already-written documents stay on disk.
    #[error("failed to persist report results")]
    Write(#[from] anyhow::Error),
}
