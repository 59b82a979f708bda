//! EODLab Core: EOD market dataset, sparse price curves, slope comparison.
//!
//! - Record parsing with dense symbol ids and date indices
//! - Market dataset built from dated row batches, sorted by (symbol, date)
//! - `Curve` trait with a sparse-map implementation and per-symbol projections
//! - Two-curve alignment walk with gap counting and pluggable comparator/summarizer
//! - Forward-difference slope transform and the slope-compare composite
//! - Parallel ranking of symbols against a reference

pub mod config;
pub mod curve;
pub mod data;
pub mod domain;
pub mod rank;

pub use config::{ConfigError, EodConfig, LogConfig, LogFormat};
pub use curve::{Comparison, Curve, CurveBase, SymbolCurve};
pub use data::{DatasetError, EodDirectory, EodSource, MarketDataset, MemorySource};
pub use domain::{DateIndex, EodRecord, PriceField, SymbolId};
