//! Sparse curves over the date axis, and the algorithms that compare them.
//!
//! A curve maps an integer x (a date index) to an `f32` y, and is defined
//! only at some x. Two implementations exist: [`CurveBase`], a plain sparse
//! map, and [`SymbolCurve`], one symbol's field extracted from a
//! [`crate::data::MarketDataset`].

pub mod base;
pub mod compare;
pub mod slope;
pub mod symbol;

pub use base::CurveBase;
pub use compare::{align, compare, subtract, sum, Alignment, Comparison};
pub use slope::{slope, slope_compare};
pub use symbol::SymbolCurve;

/// Read-only view of a sparse curve.
pub trait Curve {
    /// Value at `x`, or `None` where the curve is undefined.
    fn y(&self, x: usize) -> Option<f32>;

    /// Every x at which the curve is defined, ascending.
    fn xs(&self) -> Vec<usize>;

    /// Number of defined points.
    fn len(&self) -> usize {
        self.xs().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: Curve + ?Sized> Curve for &C {
    fn y(&self, x: usize) -> Option<f32> {
        (**self).y(x)
    }

    fn xs(&self) -> Vec<usize> {
        (**self).xs()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
