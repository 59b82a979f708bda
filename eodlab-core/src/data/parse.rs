//! Record parser: one raw row into one [`EodRecord`].
//!
//! Row layout is positional: `symbol, date(YYYYMMDD), open, high, low,
//! close, volume`. Any field that fails to parse fails the row, and the
//! dataset build treats that as fatal.

use super::axis::DateAxis;
use crate::domain::{DateIndex, EodRecord, SymbolId};
use chrono::NaiveDate;
use std::collections::HashMap;
use thiserror::Error;

/// Number of positional fields in an EOD row.
pub const EOD_FIELD_COUNT: usize = 7;

/// Date format of the second field and of EOD file names.
pub const EOD_DATE_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected 7 fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid date '{value}' (expected YYYYMMDD): {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("date {date} is not on the date axis")]
    DateNotOnAxis { date: NaiveDate },

    #[error("invalid {field} '{value}': {reason}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Symbol name ↔ dense id mapping, ids assigned in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    ids: HashMap<String, SymbolId>,
    names: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for `name`, assigning the next id if the name is new.
    pub fn resolve(&mut self, name: &str) -> SymbolId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = SymbolId(self.names.len());
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: SymbolId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(id, name)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (SymbolId(i), n.as_str()))
    }
}

/// Parse one row.
///
/// All fields are validated before the symbol is resolved, so a failed row
/// never registers its symbol.
pub fn parse_record<S: AsRef<str>>(
    symbols: &mut SymbolTable,
    axis: &DateAxis,
    row: &[S],
) -> Result<EodRecord, ParseError> {
    let [symbol, date, open, high, low, close, volume] = row else {
        return Err(ParseError::FieldCount { found: row.len() });
    };

    let date_index = parse_date_index(axis, date.as_ref())?;
    let open = parse_price("open", open.as_ref())?;
    let high = parse_price("high", high.as_ref())?;
    let low = parse_price("low", low.as_ref())?;
    let close = parse_price("close", close.as_ref())?;
    let volume = volume
        .as_ref()
        .trim()
        .parse::<i64>()
        .map_err(|e| ParseError::InvalidNumber {
            field: "volume",
            value: volume.as_ref().to_string(),
            reason: e.to_string(),
        })?;

    Ok(EodRecord {
        symbol_id: symbols.resolve(symbol.as_ref().trim()),
        date_index,
        open,
        high,
        low,
        close,
        volume,
    })
}

/// Parse a `YYYYMMDD` string into a calendar date.
pub fn parse_eod_date(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value.trim(), EOD_DATE_FORMAT).map_err(|source| {
        ParseError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

fn parse_date_index(axis: &DateAxis, value: &str) -> Result<DateIndex, ParseError> {
    let date = parse_eod_date(value)?;
    axis.index_of(date).ok_or(ParseError::DateNotOnAxis { date })
}

fn parse_price(field: &'static str, value: &str) -> Result<f32, ParseError> {
    value
        .trim()
        .parse::<f32>()
        .map_err(|e| ParseError::InvalidNumber {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
