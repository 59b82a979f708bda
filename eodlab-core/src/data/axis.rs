//! DateAxis: the sorted, deduplicated calendar every index points into.

use crate::domain::DateIndex;
use chrono::NaiveDate;

/// Ascending, strictly increasing list of trading dates.
///
/// Built once from the dates that have a source file, before any row is
/// parsed. A [`DateIndex`] is a position in this list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateAxis {
    dates: Vec<NaiveDate>,
}

impl DateAxis {
    /// Build an axis from dates in any order; duplicates collapse.
    pub fn new(mut dates: Vec<NaiveDate>) -> Self {
        dates.sort_unstable();
        dates.dedup();
        Self { dates }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Date at `index`, or `None` past the end of the axis.
    pub fn date_at(&self, index: DateIndex) -> Option<NaiveDate> {
        self.dates.get(index.get()).copied()
    }

    /// Exact-match binary search. No nearest-date fallback.
    pub fn index_of(&self, date: NaiveDate) -> Option<DateIndex> {
        self.dates.binary_search(&date).ok().map(DateIndex)
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn iter(&self) -> impl Iterator<Item = (DateIndex, NaiveDate)> + '_ {
        self.dates
            .iter()
            .enumerate()
            .map(|(i, d)| (DateIndex(i), *d))
    }
}
