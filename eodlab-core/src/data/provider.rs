//! Source trait for dated EOD row batches, and structured error types.
//!
//! The dataset never finds or opens files itself. It asks an [`EodSource`]
//! for the list of dates that have data, then for the raw rows of each date.
//! [`super::eod_dir::EodDirectory`] reads them from disk; [`MemorySource`]
//! serves them from memory.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use thiserror::Error;

/// One raw tabular row, header already discarded.
pub type RawRow = Vec<String>;

/// Errors at the source boundary (I/O and file framing).
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid date in file name {path}: {source}")]
    InvalidFileDate {
        path: PathBuf,
        #[source]
        source: chrono::ParseError,
    },

    #[error("data directory not found: {0}")]
    MissingDirectory(PathBuf),
}

/// Provider of dated row batches.
pub trait EodSource: Send + Sync {
    /// Human-readable name of this source, for logs.
    fn name(&self) -> &str;

    /// Every date for which a batch exists, in any order.
    fn dates(&self) -> Result<Vec<NaiveDate>, DataError>;

    /// Rows for `date`, or `None` when there is no batch for that date.
    fn rows(&self, date: NaiveDate) -> Result<Option<Vec<RawRow>>, DataError>;
}

/// In-memory source.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    batches: BTreeMap<NaiveDate, Vec<RawRow>>,
    listed: BTreeSet<NaiveDate>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a batch of rows for `date`.
    pub fn with_batch<R, F>(mut self, date: NaiveDate, rows: R) -> Self
    where
        R: IntoIterator<Item = F>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let rows: Vec<RawRow> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self.listed.insert(date);
        self.batches.insert(date, rows);
        self
    }

    /// List `date` without a batch, as when a file vanishes between
    /// discovery and reading.
    pub fn with_listed_date(mut self, date: NaiveDate) -> Self {
        self.listed.insert(date);
        self
    }
}

impl EodSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn dates(&self) -> Result<Vec<NaiveDate>, DataError> {
        Ok(self.listed.iter().copied().collect())
    }

    fn rows(&self, date: NaiveDate) -> Result<Option<Vec<RawRow>>, DataError> {
        Ok(self.batches.get(&date).cloned())
    }
}
