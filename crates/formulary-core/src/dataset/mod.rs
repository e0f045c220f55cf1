//! Load-once formulary dataset.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::Product;

/// Dataset loading errors.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DatasetResult<T> = Result<T, DatasetError>;

/// The full product list, loaded once at startup and immutable for the
/// session. All queries borrow from it.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Product>,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Wrap an already-built product list.
    pub fn new(records: Vec<Product>) -> Self {
        tracing::debug!(records = records.len(), "dataset ready");
        Self {
            records,
            loaded_at: Utc::now(),
        }
    }

    /// Parse a JSON array of flat product objects. Unknown keys are ignored
    /// and missing keys take field defaults.
    pub fn from_json_str(json: &str) -> DatasetResult<Self> {
        let records: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// Read a JSON dataset from any reader.
    pub fn from_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        let records: Vec<Product> = serde_json::from_reader(reader)?;
        Ok(Self::new(records))
    }

    /// Load a JSON dataset from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Product] {
        &self.records
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When this dataset was constructed. Upstream refreshes prices each
    /// business day; the view surfaces this timestamp next to the table.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
