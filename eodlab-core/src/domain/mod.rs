//! Domain types: dense ids and parsed EOD records.

pub mod ids;
pub mod record;

pub use ids::{DateIndex, SymbolId};
pub use record::{EodRecord, PriceField, UnknownField};
