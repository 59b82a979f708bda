//! SymbolCurve: one symbol's field projected onto the date axis.

use super::{Curve, CurveBase};
use crate::domain::PriceField;

/// x = date index, y = the chosen field of that day's record.
///
/// The curve owns its points; it does not borrow the dataset it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolCurve {
    symbol: Option<String>,
    field: PriceField,
    base: CurveBase,
}

impl SymbolCurve {
    pub fn new(symbol: impl Into<String>, field: PriceField, base: CurveBase) -> Self {
        Self {
            symbol: Some(symbol.into()),
            field,
            base,
        }
    }

    /// The curve returned for a symbol the dataset has never seen.
    pub fn unknown(field: PriceField) -> Self {
        Self {
            symbol: None,
            field,
            base: CurveBase::new(),
        }
    }

    /// Symbol name, or `None` if the symbol was unknown to the dataset.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn field(&self) -> PriceField {
        self.field
    }

    pub fn base(&self) -> &CurveBase {
        &self.base
    }

    pub fn into_base(self) -> CurveBase {
        self.base
    }
}

impl Curve for SymbolCurve {
    fn y(&self, x: usize) -> Option<f32> {
        self.base.y(x)
    }

    fn xs(&self) -> Vec<usize> {
        self.base.xs()
    }

    fn len(&self) -> usize {
        self.base.len()
    }
}
