pub mod config;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod model;
pub mod runner;
pub mod time;
pub mod translate;
pub mod writer;

pub use error::FormatterError;
pub use formatter::AllureFormatter;
pub use writer::{FileWriter, ResultsWriter};
