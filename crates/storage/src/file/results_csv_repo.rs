use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use quiz_core::model::ResultRecord;

use super::mapping::{RESULTS_HEADER, ResultRow, ser};
use crate::repository::{ResultsLog, StorageError};

/// Results log stored as a CSV table, one row per recorded session.
#[derive(Debug, Clone)]
pub struct CsvResultsLog {
    path: PathBuf,
}

impl CsvResultsLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the file is absent or empty and needs a header row.
    fn needs_header(&self) -> Result<bool, StorageError> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }
}

impl ResultsLog for CsvResultsLog {
    fn append(&self, record: &ResultRecord) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let write_header = self.needs_header()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);
        if write_header {
            writer.write_record(RESULTS_HEADER).map_err(ser)?;
        }
        writer.serialize(ResultRow::from_record(record)).map_err(ser)?;
        writer.flush()?;

        tracing::debug!(
            path = %self.path.display(),
            header = write_header,
            "Appended result row"
        );
        Ok(())
    }
}
