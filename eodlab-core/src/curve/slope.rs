//! Forward-difference slope transform.
//!
//! For defined x₀ < x₁ < … < xₙ₋₁ the slope curve holds
//! `(y(xₖ₊₁) − y(xₖ)) / (xₖ₊₁ − xₖ)` at `xₖ` for k in `0..n-2`. The final
//! pair `(xₙ₋₂, xₙ₋₁)` is not emitted, so n points give n − 2 slopes, and
//! fewer than three points give no curve at all.

use super::compare::{compare, subtract, sum, Comparison};
use super::{Curve, CurveBase};

/// Slope curve of `curve`, or `None` when it has fewer than three points.
pub fn slope<C: Curve + ?Sized>(curve: &C) -> Option<CurveBase> {
    let xs = curve.xs();
    if xs.len() <= 2 {
        return None;
    }

    let mut out = CurveBase::new();
    for pair in xs[..xs.len() - 1].windows(2) {
        let (x0, x1) = (pair[0], pair[1]);
        let (Some(y0), Some(y1)) = (curve.y(x0), curve.y(x1)) else {
            continue;
        };
        #[allow(clippy::cast_precision_loss)]
        let dx = (x1 - x0) as f32;
        out.insert(x0, (y1 - y0) / dx);
    }
    Some(out)
}

/// Slope both curves, then compare with `ya - yb` summed over aligned points.
///
/// A curve too short for a slope compares as empty.
pub fn slope_compare<A, B>(a: &A, b: &B) -> Comparison
where
    A: Curve + ?Sized,
    B: Curve + ?Sized,
{
    let slope_a = slope(a).unwrap_or_default();
    let slope_b = slope(b).unwrap_or_default();
    compare(&slope_a, &slope_b, subtract, sum)
}
