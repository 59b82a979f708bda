//! Directory of daily EOD files.
//!
//! Layout: `{data_dir}/{prefix}{YYYYMMDD}.{ext}`, e.g. `edata/NYSE_20190924.txt`.
//! Each file is comma-separated with one header row.

use super::parse::EOD_DATE_FORMAT;
use super::provider::{DataError, EodSource, RawRow};
use crate::config::EodConfig;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads dated EOD files from one directory.
#[derive(Debug, Clone)]
pub struct EodDirectory {
    dir: PathBuf,
    prefix: String,
    extension: String,
    label: String,
}

impl EodDirectory {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        let dir = dir.into();
        let label = dir.display().to_string();
        Self {
            dir,
            prefix: prefix.into(),
            extension: extension.into(),
            label,
        }
    }

    pub fn from_config(config: &EodConfig) -> Self {
        Self::new(&config.data_dir, &config.file_prefix, &config.file_extension)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding rows for `date`.
    pub fn file_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!(
            "{}{}.{}",
            self.prefix,
            date.format(EOD_DATE_FORMAT),
            self.extension
        ))
    }

    /// Date encoded in `file_name`.
    ///
    /// `Ok(None)` when the name does not match `{prefix}{8 digits}.{ext}`;
    /// an error when it matches but the digits are not a calendar date.
    fn date_of(&self, file_name: &str) -> Result<Option<NaiveDate>, DataError> {
        let Some(stem) = file_name
            .strip_prefix(&self.prefix)
            .and_then(|rest| rest.strip_suffix(&self.extension))
            .and_then(|rest| rest.strip_suffix('.'))
        else {
            return Ok(None);
        };
        if stem.len() != 8 || !stem.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(None);
        }
        NaiveDate::parse_from_str(stem, EOD_DATE_FORMAT)
            .map(Some)
            .map_err(|source| DataError::InvalidFileDate {
                path: self.dir.join(file_name),
                source,
            })
    }
}

impl EodSource for EodDirectory {
    fn name(&self) -> &str {
        &self.label
    }

    fn dates(&self) -> Result<Vec<NaiveDate>, DataError> {
        if !self.dir.is_dir() {
            return Err(DataError::MissingDirectory(self.dir.clone()));
        }
        let io_err = |source| DataError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut dates = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            if !entry.path().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            match self.date_of(&name)? {
                Some(date) => dates.push(date),
                None => tracing::warn!(file = %name, "skipping file not named like an EOD file"),
            }
        }

        dates.sort_unstable();
        dates.dedup();
        tracing::debug!(dir = %self.dir.display(), files = dates.len(), "discovered EOD files");
        Ok(dates)
    }

    fn rows(&self, date: NaiveDate) -> Result<Option<Vec<RawRow>>, DataError> {
        let path = self.file_path(date);
        if !path.exists() {
            return Ok(None);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&path)
            .map_err(|source| DataError::Csv {
                path: path.clone(),
                source,
            })?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| DataError::Csv {
                path: path.clone(),
                source,
            })?;
            rows.push(record.iter().map(str::to_owned).collect());
        }
        Ok(Some(rows))
    }
}
