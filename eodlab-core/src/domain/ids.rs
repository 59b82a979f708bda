use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense symbol id, assigned in first-seen order during a dataset build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub usize);

impl From<usize> for SymbolId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a calendar date on the dataset's date axis.
///
/// This is the shared time coordinate: curve x-values are raw date indices,
/// so two curves from the same dataset align by plain integer equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateIndex(pub usize);

impl DateIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for DateIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for DateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
