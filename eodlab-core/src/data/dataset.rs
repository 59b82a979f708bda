//! MarketDataset: the date axis, the symbol table, and every parsed record.
//!
//! Build order:
//! 1. Seed the [`DateAxis`] from the source's date list.
//! 2. Walk the axis ascending; for each date parse that date's rows.
//!    Dates with no batch are skipped. Any unparseable row aborts the build.
//! 3. Sort all records by `(symbol_id, date_index)`.
//!
//! After the build the dataset is immutable. Curves extracted from it are
//! owned copies.

use super::axis::DateAxis;
use super::parse::{parse_record, ParseError, SymbolTable};
use super::provider::{DataError, EodSource, RawRow};
use crate::curve::{CurveBase, SymbolCurve};
use crate::domain::{DateIndex, EodRecord, PriceField, SymbolId, UnknownField};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    /// `row` is 1-based over data rows, header excluded.
    #[error("{date} row {row}: {source}")]
    Parse {
        date: NaiveDate,
        row: usize,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    UnknownField(#[from] UnknownField),
}

#[derive(Debug, Clone, Default)]
pub struct MarketDataset {
    symbols: SymbolTable,
    axis: DateAxis,
    records: Vec<EodRecord>,
}

impl MarketDataset {
    /// Build from a source: axis first, then every batch in date order.
    pub fn load<S: EodSource + ?Sized>(source: &S) -> Result<Self, DatasetError> {
        let axis = DateAxis::new(source.dates()?);
        tracing::debug!(source = source.name(), dates = axis.len(), "date axis built");

        let dates = axis.as_slice().to_vec();
        let mut builder = DatasetBuilder::new(axis);
        for date in dates {
            builder.ingest(date, source.rows(date)?)?;
        }

        let dataset = builder.finish();
        tracing::info!(
            source = source.name(),
            dates = dataset.date_count(),
            symbols = dataset.symbol_count(),
            records = dataset.len(),
            "market dataset loaded"
        );
        Ok(dataset)
    }

    /// Total record count.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Size of the date axis.
    pub fn date_count(&self) -> usize {
        self.axis.len()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn dates(&self) -> &DateAxis {
        &self.axis
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// All records, sorted by `(symbol_id, date_index)`.
    pub fn records(&self) -> &[EodRecord] {
        &self.records
    }

    pub fn symbol_id(&self, name: &str) -> Option<SymbolId> {
        self.symbols.get(name)
    }

    /// Reverse lookup; `None` for an id never assigned.
    pub fn symbol_name(&self, id: SymbolId) -> Option<&str> {
        self.symbols.name(id)
    }

    pub fn date_at(&self, index: DateIndex) -> Option<NaiveDate> {
        self.axis.date_at(index)
    }

    /// Exact-date lookup; `None` when the date is not on the axis.
    pub fn date_index(&self, date: NaiveDate) -> Option<DateIndex> {
        self.axis.index_of(date)
    }

    /// The contiguous run of records for one symbol.
    pub fn records_for(&self, id: SymbolId) -> &[EodRecord] {
        let start = self.records.partition_point(|r| r.symbol_id < id);
        let end = start + self.records[start..].partition_point(|r| r.symbol_id == id);
        &self.records[start..end]
    }

    /// `field` of `symbol` keyed by date index.
    ///
    /// An unknown symbol yields an empty, unnamed curve rather than an error.
    pub fn extract_curve(&self, symbol: &str, field: PriceField) -> SymbolCurve {
        let Some(id) = self.symbols.get(symbol) else {
            return SymbolCurve::unknown(field);
        };
        let base: CurveBase = self
            .records_for(id)
            .iter()
            .map(|r| (r.date_index.get(), r.field(field)))
            .collect();
        SymbolCurve::new(symbol, field, base)
    }

    /// [`Self::extract_curve`] with the field given by name, e.g. `"Close"`.
    pub fn extract_curve_by_name(
        &self,
        symbol: &str,
        field: &str,
    ) -> Result<SymbolCurve, DatasetError> {
        Ok(self.extract_curve(symbol, field.parse()?))
    }

    /// BLAKE3 digest over the symbol table, the date axis, and all records.
    ///
    /// Two builds of the same input produce the same fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for (id, name) in self.symbols.iter() {
            hasher.update(&(id.0 as u64).to_le_bytes());
            hasher.update(name.as_bytes());
            hasher.update(&[0]);
        }
        for date in self.axis.as_slice() {
            hasher.update(date.to_string().as_bytes());
        }
        for r in &self.records {
            hasher.update(&(r.symbol_id.0 as u64).to_le_bytes());
            hasher.update(&(r.date_index.0 as u64).to_le_bytes());
            hasher.update(&r.open.to_le_bytes());
            hasher.update(&r.high.to_le_bytes());
            hasher.update(&r.low.to_le_bytes());
            hasher.update(&r.close.to_le_bytes());
            hasher.update(&r.volume.to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }

    /// Record with symbol and date resolved, for diagnostics.
    pub fn describe_record(&self, record: &EodRecord) -> String {
        let symbol = self.symbol_name(record.symbol_id).unwrap_or("?");
        let date = self
            .date_at(record.date_index)
            .map(|d| d.to_string())
            .unwrap_or_else(|| "?".into());
        format!(
            "{{{symbol}, {date}, {}, {}, {}, {}, {}}}",
            record.open, record.high, record.low, record.close, record.volume
        )
    }
}

/// Incremental build state: one batch per call, in ascending date order.
#[derive(Debug)]
pub struct DatasetBuilder {
    symbols: SymbolTable,
    axis: DateAxis,
    records: Vec<EodRecord>,
}

impl DatasetBuilder {
    pub fn new(axis: DateAxis) -> Self {
        Self {
            symbols: SymbolTable::new(),
            axis,
            records: Vec::new(),
        }
    }

    /// Parse and append one date's rows. `None` means no data for that date.
    pub fn ingest(
        &mut self,
        date: NaiveDate,
        rows: Option<Vec<RawRow>>,
    ) -> Result<(), DatasetError> {
        let Some(rows) = rows else {
            tracing::debug!(%date, "no batch for date, skipping");
            return Ok(());
        };

        self.records.reserve(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let record = parse_record(&mut self.symbols, &self.axis, row.as_slice())
                .map_err(|source| DatasetError::Parse {
                    date,
                    row: i + 1,
                    source,
                })?;
            self.records.push(record);
        }
        tracing::debug!(%date, rows = rows.len(), "ingested batch");
        Ok(())
    }

    /// Sort and freeze.
    pub fn finish(mut self) -> MarketDataset {
        self.records.sort_by_key(EodRecord::key);
        MarketDataset {
            symbols: self.symbols,
            axis: self.axis,
            records: self.records,
        }
    }
}
