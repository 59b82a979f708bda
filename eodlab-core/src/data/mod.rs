//! Data ingestion: sources, row parsing, and the market dataset.

pub mod axis;
pub mod dataset;
pub mod eod_dir;
pub mod parse;
pub mod provider;

pub use axis::DateAxis;
pub use dataset::{DatasetBuilder, DatasetError, MarketDataset};
pub use eod_dir::EodDirectory;
pub use parse::{parse_record, ParseError, SymbolTable};
pub use provider::{DataError, EodSource, MemorySource, RawRow};
