//! Property tests for dataset and curve invariants.
//!
//! Uses proptest to verify:
//! 1. Date axis is strictly increasing and index lookup round-trips
//! 2. Symbol ids are deterministic, dense, and first-seen ordered
//! 3. Records are sorted by (symbol_id, date_index) after a build
//! 4. Alignment only records points defined in both curves
//! 5. Slope transform emits n - 2 points for n >= 3

use chrono::NaiveDate;
use eodlab_core::curve::{align, compare, slope, subtract, sum, Curve, CurveBase};
use eodlab_core::data::{DateAxis, MarketDataset, MemorySource};
use eodlab_core::{DateIndex, SymbolId};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..3650).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2010, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

fn arb_curve() -> impl Strategy<Value = CurveBase> {
    prop::collection::btree_map(0usize..60, -100.0f32..100.0, 0..30).prop_map(CurveBase::from)
}

/// Per day, the symbol indices (into S0..S5) that trade that day.
fn arb_days() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0usize..6, 0..6), 1..10)
}

fn source_from(days: &[Vec<usize>]) -> MemorySource {
    let base = NaiveDate::from_ymd_opt(2019, 1, 2).unwrap();
    let mut src = MemorySource::new();
    for (i, syms) in days.iter().enumerate() {
        let date = base + chrono::Duration::days(i as i64);
        let stamp = date.format("%Y%m%d").to_string();
        let rows: Vec<Vec<String>> = syms
            .iter()
            .map(|s| {
                vec![
                    format!("S{s}"),
                    stamp.clone(),
                    "1.5".into(),
                    "2.0".into(),
                    "1.0".into(),
                    format!("{}.25", i + s),
                    "100".into(),
                ]
            })
            .collect();
        src = src.with_batch(date, rows);
    }
    src
}

// ── 1. Date axis ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn date_axis_strictly_increasing(dates in prop::collection::vec(arb_date(), 0..50)) {
        let axis = DateAxis::new(dates.clone());
        for w in axis.as_slice().windows(2) {
            prop_assert!(w[0] < w[1]);
        }
        for (i, date) in axis.iter() {
            prop_assert_eq!(axis.index_of(date), Some(i));
            prop_assert_eq!(axis.date_at(i), Some(date));
        }
        for date in &dates {
            prop_assert!(axis.index_of(*date).is_some());
        }
        prop_assert_eq!(axis.date_at(DateIndex(axis.len())), None);
    }
}

// ── 2. Symbol ids / 3. Sort invariant ────────────────────────────────

proptest! {
    #[test]
    fn symbol_ids_are_stable_across_builds(days in arb_days()) {
        let first = MarketDataset::load(&source_from(&days)).unwrap();
        let second = MarketDataset::load(&source_from(&days)).unwrap();

        prop_assert_eq!(first.fingerprint(), second.fingerprint());
        let a: Vec<_> = first.symbols().iter().map(|(id, n)| (id, n.to_string())).collect();
        let b: Vec<_> = second.symbols().iter().map(|(id, n)| (id, n.to_string())).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn symbol_ids_are_dense_and_first_seen(days in arb_days()) {
        let ds = MarketDataset::load(&source_from(&days)).unwrap();

        let mut seen: Vec<String> = Vec::new();
        for syms in &days {
            for s in syms {
                let name = format!("S{s}");
                if !seen.contains(&name) {
                    seen.push(name);
                }
            }
        }
        prop_assert_eq!(ds.symbol_count(), seen.len());
        for (i, name) in seen.iter().enumerate() {
            prop_assert_eq!(ds.symbol_id(name), Some(SymbolId(i)));
            prop_assert_eq!(ds.symbol_name(SymbolId(i)), Some(name.as_str()));
        }
    }

    #[test]
    fn records_sorted_after_build(days in arb_days()) {
        let ds = MarketDataset::load(&source_from(&days)).unwrap();
        let total: usize = days.iter().map(Vec::len).sum();

        prop_assert_eq!(ds.len(), total);
        for w in ds.records().windows(2) {
            prop_assert!(w[0].key() <= w[1].key());
        }
    }

    #[test]
    fn extracted_curve_matches_records(days in arb_days(), pick in 0usize..6) {
        let ds = MarketDataset::load(&source_from(&days)).unwrap();
        let name = format!("S{pick}");
        let curve = ds.extract_curve(&name, eodlab_core::PriceField::Close);

        match ds.symbol_id(&name) {
            None => prop_assert!(curve.is_empty()),
            Some(id) => {
                for r in ds.records_for(id) {
                    prop_assert!(curve.y(r.date_index.get()).is_some());
                }
                let xs = curve.xs();
                for w in xs.windows(2) {
                    prop_assert!(w[0] < w[1]);
                }
            }
        }
    }
}

// ── 4. Alignment ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn aligned_points_are_defined_in_both(a in arb_curve(), b in arb_curve()) {
        let aligned = align(&a, &b, subtract);

        prop_assert!(aligned.diffs.len() <= a.len().min(b.len()));
        for (x, diff) in &aligned.diffs {
            let (ya, yb) = (a.y(*x).unwrap(), b.y(*x).unwrap());
            prop_assert_eq!(*diff, ya - yb);
        }
    }

    #[test]
    fn self_comparison_aligns_every_point(a in arb_curve()) {
        let result = compare(&a, &a, subtract, sum);
        let aligned = align(&a, &a, subtract);

        prop_assert_eq!(result.score, 0.0);
        prop_assert_eq!(aligned.diffs.len(), a.len());
        // holes below the last x are both-undefined iterations, one gap each
        let holes = a.last_x().map_or(0, |last| last + 1 - a.len());
        prop_assert_eq!(result.gaps, holes);
    }

    #[test]
    fn empty_side_counts_every_point(a in arb_curve()) {
        let empty = CurveBase::new();
        let result = compare(&a, &empty, subtract, sum);
        prop_assert_eq!(result.score, 0.0);
        prop_assert_eq!(result.gaps, a.len());
    }
}

// ── 5. Slope ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn slope_point_count(a in arb_curve()) {
        match slope(&a) {
            None => prop_assert!(a.len() <= 2),
            Some(s) => {
                prop_assert!(a.len() >= 3);
                prop_assert_eq!(s.len(), a.len() - 2);
                let xs = a.xs();
                prop_assert_eq!(s.xs(), xs[..xs.len() - 2].to_vec());
            }
        }
    }
}
