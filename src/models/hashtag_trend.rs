use crate::types::{Hashtag, PostDate, RecordCount};
use serde::Serialize;

/// Per-hashtag record counts for one observed date. `counts[i]` belongs to
/// `HashtagTrend::hashtags[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashtagTrendEntry {
    pub date: PostDate,
    pub counts: Vec<RecordCount>,
}

/// Dense date x hashtag grid over the most frequent hashtags, ordered by
/// ascending date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashtagTrend {
    /// Case-folded hashtags in rank order.
    pub hashtags: Vec<Hashtag>,
    pub entries: Vec<HashtagTrendEntry>,
}

impl HashtagTrend {
    /// Number of records on `date` carrying `hashtag` (matched case-insensitively).
    ///
    /// Returns `None` when the hashtag is not tracked or the date was not observed.
    pub fn count(&self, date: PostDate, hashtag: &str) -> Option<RecordCount> {
        let folded = hashtag.to_lowercase();
        let column = self.hashtags.iter().position(|tracked| *tracked == folded)?;

        self.entries
            .iter()
            .find(|entry| entry.date == date)
            .map(|entry| entry.counts[column])
    }

    /// The series of one tracked hashtag across all dates.
    pub fn series(&self, hashtag: &str) -> Option<Vec<(PostDate, RecordCount)>> {
        let folded = hashtag.to_lowercase();
        let column = self.hashtags.iter().position(|tracked| *tracked == folded)?;

        Some(
            self.entries
                .iter()
                .map(|entry| (entry.date, entry.counts[column]))
                .collect(),
        )
    }
}
