use crate::models::{SentimentDistribution, SentimentLabel};
use crate::types::{PostDate, RecordCount};
use serde::Serialize;

/// Per-date label counts for one observed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentTimelineEntry {
    pub date: PostDate,
    pub counts: SentimentDistribution,
}

/// Dense date x label grid, ordered by ascending date.
///
/// Every observed date carries all three labels; a label without records on a
/// date reports `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentTimeline {
    pub entries: Vec<SentimentTimelineEntry>,
}

impl SentimentTimeline {
    pub fn dates(&self) -> impl Iterator<Item = PostDate> + '_ {
        self.entries.iter().map(|entry| entry.date)
    }

    /// Count for a `(date, label)` cell, or `None` when the date was not observed.
    pub fn count(&self, date: PostDate, label: SentimentLabel) -> Option<RecordCount> {
        self.entries
            .iter()
            .find(|entry| entry.date == date)
            .map(|entry| entry.counts.count(label))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
