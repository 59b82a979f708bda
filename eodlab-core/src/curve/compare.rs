//! Two-curve alignment walk.
//!
//! Two cursors start at x = 0 and walk the integer x-axis. When both curves
//! are defined at equal cursors the point is aligned and the comparator
//! runs; every other iteration is a gap. x-values are date indices from one
//! shared axis, so plain equality is the alignment test.
//!
//! Per iteration:
//! - either side undefined at its cursor: one gap, advance each cursor whose
//!   side is undefined (both if both are; that still counts as one gap)
//! - both defined, cursors differ: one gap, advance the smaller cursor
//! - both defined, cursors equal: record `comparator(i, j, ya, yb)` at `i`,
//!   advance both
//!
//! The walk ends as soon as either cursor passes its curve's last defined x.

use super::Curve;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Scalar result of a comparison plus the number of gap iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub score: f32,
    pub gaps: usize,
}

/// Per-point comparator output keyed by x, before summarizing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alignment {
    pub diffs: BTreeMap<usize, f32>,
    pub gaps: usize,
}

/// Walk `a` and `b` in lockstep, collecting comparator output at aligned x.
///
/// If either curve has no defined points the walk is skipped and every
/// defined point of the other counts as a gap.
pub fn align<A, B, F>(a: &A, b: &B, mut comparator: F) -> Alignment
where
    A: Curve + ?Sized,
    B: Curve + ?Sized,
    F: FnMut(usize, usize, f32, f32) -> f32,
{
    let xs_a = a.xs();
    let xs_b = b.xs();
    let (Some(&last_a), Some(&last_b)) = (xs_a.last(), xs_b.last()) else {
        return Alignment {
            diffs: BTreeMap::new(),
            gaps: xs_a.len() + xs_b.len(),
        };
    };

    let mut diffs = BTreeMap::new();
    let mut gaps = 0;
    let (mut i, mut j) = (0usize, 0usize);

    while i <= last_a && j <= last_b {
        match (a.y(i), b.y(j)) {
            (Some(ya), Some(yb)) => match i.cmp(&j) {
                Ordering::Less => {
                    gaps += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    gaps += 1;
                    j += 1;
                }
                Ordering::Equal => {
                    diffs.insert(i, comparator(i, j, ya, yb));
                    i += 1;
                    j += 1;
                }
            },
            (ya, yb) => {
                gaps += 1;
                if ya.is_none() {
                    i += 1;
                }
                if yb.is_none() {
                    j += 1;
                }
            }
        }
    }

    Alignment { diffs, gaps }
}

/// [`align`], then reduce the diffs with `summarizer`.
///
/// Returns `(0, |xs_a| + |xs_b|)` without calling either function when a
/// curve is empty.
pub fn compare<A, B, F, S>(a: &A, b: &B, comparator: F, summarizer: S) -> Comparison
where
    A: Curve + ?Sized,
    B: Curve + ?Sized,
    F: FnMut(usize, usize, f32, f32) -> f32,
    S: FnOnce(&BTreeMap<usize, f32>) -> f32,
{
    if a.is_empty() || b.is_empty() {
        return Comparison {
            score: 0.0,
            gaps: a.len() + b.len(),
        };
    }
    let Alignment { diffs, gaps } = align(a, b, comparator);
    Comparison {
        score: summarizer(&diffs),
        gaps,
    }
}

/// Comparator: `ya - yb`.
pub fn subtract(_x1: usize, _x2: usize, ya: f32, yb: f32) -> f32 {
    ya - yb
}

/// Summarizer: sum of all diffs.
pub fn sum(diffs: &BTreeMap<usize, f32>) -> f32 {
    diffs.values().sum()
}
