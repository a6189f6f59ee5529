// Writer module - persistence port for finished report documents

pub mod archive;
pub mod fs;

pub use archive::Archiver;
pub use fs::FileWriter;

use crate::model::{Container, TestCase};
use anyhow::Result;

/// Persistence port the formatter depends on.
///
/// All methods are synchronous and any error is fatal to the run; the
/// formatter never retries a flush.
pub trait ResultsWriter {
    /// Prepare the output location. Called once at run start.
    fn init(&self) -> Result<()>;

    /// Persist one finished test case.
    fn write_test_case(&self, test_case: &TestCase) -> Result<()>;

    /// Persist the run container and perform final packaging.
    fn write_container(&self, container: &Container) -> Result<()>;
}
