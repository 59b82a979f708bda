//! CurveBase: a curve backed directly by a sparse x → y map.

use super::Curve;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveBase {
    values: BTreeMap<usize, f32>,
}

impl CurveBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set y at `x`, replacing any previous value.
    pub fn insert(&mut self, x: usize, y: f32) {
        self.values.insert(x, y);
    }

    /// Defined points, ascending by x.
    pub fn points(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.values.iter().map(|(x, y)| (*x, *y))
    }

    pub fn first_x(&self) -> Option<usize> {
        self.values.keys().next().copied()
    }

    pub fn last_x(&self) -> Option<usize> {
        self.values.keys().next_back().copied()
    }
}

impl Curve for CurveBase {
    fn y(&self, x: usize) -> Option<f32> {
        self.values.get(&x).copied()
    }

    fn xs(&self) -> Vec<usize> {
        self.values.keys().copied().collect()
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}

impl FromIterator<(usize, f32)> for CurveBase {
    fn from_iter<I: IntoIterator<Item = (usize, f32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<usize, f32>> for CurveBase {
    fn from(values: BTreeMap<usize, f32>) -> Self {
        Self { values }
    }
}
