use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::core::AvError;

/// Append-only JSON Lines store for raw polling documents.
///
/// One document per line, exactly as fetched, error payloads included.
/// The collector appends after every poll and the pipeline later reads the
/// whole file back as its input snapshot, so repeated polls accumulate into
/// reproducible analysis input.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    /// Opens a store backed by `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one raw document as a single line.
    ///
    /// # Errors
    ///
    /// Returns [`AvError::Store`] when the file cannot be opened or written.
    pub fn append(&self, document: &Value) -> Result<(), AvError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(document)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    /// Reads back every stored document, in append order.
    ///
    /// A store that has never been appended to reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`AvError::Store`] on I/O failure and [`AvError::Json`] when
    /// a stored line is not valid JSON.
    pub fn documents(&self) -> Result<Vec<Value>, AvError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(AvError::Store(e)),
        };
        let mut documents = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            documents.push(serde_json::from_str(&line)?);
        }
        Ok(documents)
    }
}
