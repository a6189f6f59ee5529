// Filesystem writer - stages documents in a temp directory, zips at run end

use crate::model::{Container, TestCase};
use crate::writer::{Archiver, ResultsWriter};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

/// [`ResultsWriter`] that stages each document as
/// `<uuid>-result.json` / `<uuid>-container.json` in a per-run temp
/// directory and bundles everything into one timestamped zip archive in the
/// output directory when the container is written.
///
/// Already-staged documents survive a later write failure; there is no
/// rollback.
pub struct FileWriter {
    output_dir: PathBuf,
    staging_dir: PathBuf,
}

impl FileWriter {
    /// Create a writer targeting `output_dir`. The staging directory is
    /// unique per writer so concurrent runs cannot mix documents.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        let staging_dir = std::env::temp_dir()
            .join("allure-bdd")
            .join(Uuid::new_v4().to_string());

        Self {
            output_dir: output_dir.into(),
            staging_dir,
        }
    }

    fn write_document<T: Serialize>(&self, document: &T, file_name: &str) -> Result<()> {
        let path = self.staging_dir.join(file_name);
        let file = fs::File::create(&path)
            .with_context(|| format!("Failed to create report document: {}", path.display()))?;

        serde_json::to_writer(&file, document)
            .with_context(|| format!("Failed to serialize report document: {file_name}"))?;

        debug!(file = %path.display(), "report document staged");
        Ok(())
    }
}

impl ResultsWriter for FileWriter {
    fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create report output directory: {}",
                self.output_dir.display()
            )
        })?;

        fs::create_dir_all(&self.staging_dir).with_context(|| {
            format!(
                "Failed to create staging directory: {}",
                self.staging_dir.display()
            )
        })
    }

    fn write_test_case(&self, test_case: &TestCase) -> Result<()> {
        let file_name = format!("{}-result.json", test_case.uuid);
        self.write_document(test_case, &file_name)
    }

    fn write_container(&self, container: &Container) -> Result<()> {
        let file_name = format!("{}-container.json", container.uuid);
        self.write_document(container, &file_name)?;

        let archive_name = format!(
            "{}.zip",
            chrono::Local::now().format("%Y_%m_%d_%H-%M-%S%.6f")
        );
        let archive_path = self.output_dir.join(archive_name);

        Archiver::new(&self.staging_dir).zip(&archive_path)?;
        debug!(archive = %archive_path.display(), "report archive written");

        fs::remove_dir_all(&self.staging_dir).with_context(|| {
            format!(
                "Failed to remove staging directory: {}",
                self.staging_dir.display()
            )
        })
    }
}
