//! Rank many symbols by slope difference against one reference.

use crate::curve::{compare, slope, subtract, sum, Comparison, Curve, CurveBase};
use crate::data::MarketDataset;
use crate::domain::PriceField;
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub symbol: String,
    pub comparison: Comparison,
}

/// Slope-compare `reference` against each candidate in parallel.
///
/// Sorted by ascending `|score|`, ties broken by fewer gaps then by symbol.
/// The reference itself is skipped if it appears among the candidates.
pub fn rank_by_slope_diff(
    dataset: &MarketDataset,
    reference: &str,
    field: PriceField,
    candidates: &[&str],
) -> Vec<RankEntry> {
    let reference_slope = slope(&dataset.extract_curve(reference, field)).unwrap_or_default();

    let mut entries: Vec<RankEntry> = candidates
        .par_iter()
        .filter(|sym| **sym != reference)
        .map(|sym| {
            let curve = dataset.extract_curve(sym, field);
            RankEntry {
                symbol: (*sym).to_string(),
                comparison: compare_against(&reference_slope, &curve),
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        a.comparison
            .score
            .abs()
            .total_cmp(&b.comparison.score.abs())
            .then(a.comparison.gaps.cmp(&b.comparison.gaps))
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
    entries
}

/// `slope_compare` with the reference slope already computed.
fn compare_against<C: Curve>(reference_slope: &CurveBase, curve: &C) -> Comparison {
    let other = slope(curve).unwrap_or_default();
    compare(reference_slope, &other, subtract, sum)
}

/// All symbols of the dataset other than `reference`, in id order.
pub fn other_symbols<'a>(dataset: &'a MarketDataset, reference: &str) -> Vec<&'a str> {
    dataset
        .symbols()
        .iter()
        .map(|(_, name)| name)
        .filter(|name| *name != reference)
        .collect()
}
