//! EodRecord: one parsed end-of-day observation.

use super::ids::{DateIndex, SymbolId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of an EOD file with symbol and date resolved to dense indices.
///
/// Source layout: `<ticker>,<date>,<open>,<high>,<low>,<close>,<vol>`,
/// e.g. `A,20190924,78.29,78.39,75.64,75.97,4317500`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EodRecord {
    pub symbol_id: SymbolId,
    pub date_index: DateIndex,
    pub open: f32,
    pub high: f32,
    pub low: f32,
    pub close: f32,
    pub volume: i64,
}

impl EodRecord {
    /// Sort key used by the dataset: `(symbol_id, date_index)`.
    pub fn key(&self) -> (SymbolId, DateIndex) {
        (self.symbol_id, self.date_index)
    }

    /// Project one numeric field as a curve value.
    pub fn field(&self, field: PriceField) -> f32 {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Close => self.close,
            #[allow(clippy::cast_precision_loss)]
            PriceField::Volume => self.volume as f32,
        }
    }
}

/// Numeric fields of an [`EodRecord`] that can be extracted as a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl PriceField {
    pub const ALL: [PriceField; 5] = [
        PriceField::Open,
        PriceField::High,
        PriceField::Low,
        PriceField::Close,
        PriceField::Volume,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PriceField::Open => "Open",
            PriceField::High => "High",
            PriceField::Low => "Low",
            PriceField::Close => "Close",
            PriceField::Volume => "Volume",
        }
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a field name matches none of [`PriceField::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown price field '{0}' (expected one of Open, High, Low, Close, Volume)")]
pub struct UnknownField(pub String);

impl FromStr for PriceField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceField::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
