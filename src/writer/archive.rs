// Archiver - bundles a flat staging directory into one zip file

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Bulk read-then-zip pass over a staging directory. Only regular files at
/// the top level are picked up; the staging layout is flat.
pub struct Archiver {
    staging_dir: PathBuf,
}

impl Archiver {
    pub fn new(staging_dir: impl Into<PathBuf>) -> Self {
        Self {
            staging_dir: staging_dir.into(),
        }
    }

    /// Create `archive_path` containing every file currently staged.
    pub fn zip(&self, archive_path: &Path) -> Result<()> {
        let out = fs::File::create(archive_path)
            .with_context(|| format!("Failed to create archive: {}", archive_path.display()))?;

        let mut writer = ZipWriter::new(out);
        self.add_files(&mut writer)?;

        writer.finish().context("Failed to finalize archive")?;
        Ok(())
    }

    fn add_files(&self, writer: &mut ZipWriter<fs::File>) -> Result<()> {
        let entries = fs::read_dir(&self.staging_dir).with_context(|| {
            format!(
                "Failed to read staging directory: {}",
                self.staging_dir.display()
            )
        })?;

        for entry in entries {
            let entry = entry.context("Failed to read staging directory entry")?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let data = fs::read(&path)
                .with_context(|| format!("Failed to read staged file: {}", path.display()))?;

            writer
                .start_file(name.as_str(), SimpleFileOptions::default())
                .with_context(|| format!("Failed to add archive entry: {name}"))?;
            writer
                .write_all(&data)
                .with_context(|| format!("Failed to write archive entry: {name}"))?;
        }

        Ok(())
    }
}
