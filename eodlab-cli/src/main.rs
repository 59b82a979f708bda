//! EODLab CLI: inspect an EOD dataset and compare price momentum.
//!
//! Commands:
//! - `info`: record, date, and symbol counts plus the dataset fingerprint
//! - `curve`: dump one symbol's field as `date,value` lines
//! - `compare`: slope-compare two symbols
//! - `rank`: slope-compare one symbol against every other, in parallel

mod obs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eodlab_core::curve::{slope_compare, Curve};
use eodlab_core::rank::{other_symbols, rank_by_slope_diff};
use eodlab_core::{DateIndex, EodConfig, EodDirectory, LogFormat, MarketDataset, PriceField};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "eodlab",
    about = "EODLab CLI: EOD price curves and slope comparison"
)]
struct Cli {
    /// Path to a TOML config file. Missing file means defaults.
    #[arg(long, default_value = "eodlab.toml")]
    config: PathBuf,

    /// Directory of daily EOD files. Overrides the config.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log filter (e.g. info, eodlab_core=debug). Overrides the config.
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, default_value_t = false)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the loaded dataset.
    Info,
    /// Print one symbol's field as `date,value` lines.
    Curve {
        symbol: String,

        /// Open, High, Low, Close, or Volume.
        #[arg(long, default_value = "close")]
        field: PriceField,
    },
    /// Compare the slope curves of two symbols.
    Compare {
        a: String,
        b: String,

        #[arg(long, default_value = "close")]
        field: PriceField,
    },
    /// Rank every other symbol by slope difference against a reference.
    Rank {
        reference: String,

        #[arg(long, default_value = "close")]
        field: PriceField,

        /// Show only the first N entries.
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = EodConfig::from_file_or_default(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    if cli.json_logs {
        config.log.format = LogFormat::Json;
    }
    obs::init_tracing(&config.log.level, config.log.format)?;

    let source = EodDirectory::from_config(&config);
    let dataset = MarketDataset::load(&source)
        .with_context(|| format!("loading EOD files from {}", source.dir().display()))?;

    match cli.command {
        Commands::Info => run_info(&dataset),
        Commands::Curve { symbol, field } => run_curve(&dataset, &symbol, field),
        Commands::Compare { a, b, field } => run_compare(&dataset, &a, &b, field),
        Commands::Rank {
            reference,
            field,
            top,
        } => run_rank(&dataset, &reference, field, top),
    }
}

fn run_info(dataset: &MarketDataset) -> Result<()> {
    println!("Records:     {}", dataset.len());
    println!("Dates:       {}", dataset.date_count());
    println!("Symbols:     {}", dataset.symbol_count());
    if let (Some(first), Some(last)) = (dataset.dates().first(), dataset.dates().last()) {
        println!("Range:       {first} .. {last}");
    }
    println!("Fingerprint: {}", dataset.fingerprint());
    Ok(())
}

fn run_curve(dataset: &MarketDataset, symbol: &str, field: PriceField) -> Result<()> {
    let curve = dataset.extract_curve(symbol, field);
    if curve.symbol().is_none() {
        tracing::warn!(symbol, "unknown symbol");
    }
    for x in curve.xs() {
        let Some(y) = curve.y(x) else { continue };
        let date = dataset
            .date_at(DateIndex(x))
            .map(|d| d.to_string())
            .unwrap_or_else(|| format!("#{x}"));
        println!("{date},{y}");
    }
    Ok(())
}

fn run_compare(dataset: &MarketDataset, a: &str, b: &str, field: PriceField) -> Result<()> {
    let curve_a = dataset.extract_curve(a, field);
    let curve_b = dataset.extract_curve(b, field);
    for (name, curve) in [(a, &curve_a), (b, &curve_b)] {
        if curve.symbol().is_none() {
            tracing::warn!(symbol = name, "unknown symbol, comparing as empty");
        }
    }

    let result = slope_compare(&curve_a, &curve_b);
    println!("{a} vs {b} ({field} slope)");
    println!("  score: {:.6}", result.score);
    println!("  gaps:  {}", result.gaps);
    Ok(())
}

fn run_rank(dataset: &MarketDataset, reference: &str, field: PriceField, top: usize) -> Result<()> {
    if dataset.symbol_id(reference).is_none() {
        tracing::warn!(
            symbol = reference,
            "unknown reference symbol, every candidate compares as empty"
        );
    }
    let candidates = other_symbols(dataset, reference);
    let ranked = rank_by_slope_diff(dataset, reference, field, &candidates);

    println!("{:<4} {:<10} {:>14} {:>6}", "#", "symbol", "score", "gaps");
    for (i, entry) in ranked.iter().take(top).enumerate() {
        println!(
            "{:<4} {:<10} {:>14.6} {:>6}",
            i + 1,
            entry.symbol,
            entry.comparison.score,
            entry.comparison.gaps
        );
    }
    Ok(())
}
