use crate::models::{
    EnrichedRecord, HashtagTrend, HashtagTrendEntry, HashtagView, RecordSetView,
    SentimentDistribution, SentimentTimeline, SentimentTimelineEntry,
};
use crate::types::{HashtagFrequencies, PostDate};
use crate::utils::{count_hashtag_frequencies, rank_by_frequency};
use std::collections::BTreeMap;

/// Read-only aggregation views over a prepared record set.
///
/// Every view is recomputed from the records on each call and borrows them
/// only for the duration of that call, so views can be computed in any order.
#[derive(Clone, Copy)]
pub struct Aggregator<'a> {
    records: &'a [EnrichedRecord],
}

impl<'a> Aggregator<'a> {
    pub fn new(records: &'a [EnrichedRecord]) -> Self {
        Self { records }
    }

    /// Count of records per label, in `Positive`, `Neutral`, `Negative` order.
    pub fn sentiment_distribution(&self) -> RecordSetView<SentimentDistribution> {
        if self.records.is_empty() {
            return RecordSetView::NoRecords;
        }

        RecordSetView::Available(
            self.records
                .iter()
                .map(|record| record.sentiment_label())
                .collect(),
        )
    }

    /// The `limit` most frequent case-folded hashtags.
    ///
    /// Ties are broken by the order in which hashtags are first encountered
    /// when walking the records in order. A `limit` of zero leaves nothing to
    /// show and is reported as `NoHashtags`.
    pub fn top_hashtags(&self, limit: usize) -> HashtagView<HashtagFrequencies> {
        let ranked = rank_by_frequency(self.hashtag_frequencies(), limit);

        if ranked.is_empty() {
            return HashtagView::NoHashtags;
        }

        HashtagView::Available(ranked)
    }

    /// Dense grid of label counts for every observed date.
    pub fn sentiment_timeline(&self) -> RecordSetView<SentimentTimeline> {
        if self.records.is_empty() {
            return RecordSetView::NoRecords;
        }

        let mut by_date: BTreeMap<PostDate, SentimentDistribution> = BTreeMap::new();

        for record in self.records {
            by_date
                .entry(record.date())
                .or_default()
                .increment(record.sentiment_label());
        }

        RecordSetView::Available(SentimentTimeline {
            entries: by_date
                .into_iter()
                .map(|(date, counts)| SentimentTimelineEntry { date, counts })
                .collect(),
        })
    }

    /// Dense grid of record counts for each of the `limit` most frequent
    /// hashtags on every observed date.
    ///
    /// A record counts once towards a hashtag on its date, no matter how many
    /// times the hashtag appears in it.
    pub fn hashtag_trend(&self, limit: usize) -> HashtagView<HashtagTrend> {
        let hashtags: Vec<_> = match self.top_hashtags(limit) {
            HashtagView::NoHashtags => return HashtagView::NoHashtags,
            HashtagView::Available(ranked) => {
                ranked.into_iter().map(|(hashtag, _)| hashtag).collect()
            }
        };

        let mut by_date: BTreeMap<PostDate, Vec<usize>> = BTreeMap::new();

        for record in self.records {
            let counts = by_date
                .entry(record.date())
                .or_insert_with(|| vec![0; hashtags.len()]);

            for (column, hashtag) in hashtags.iter().enumerate() {
                if record.has_hashtag(hashtag) {
                    counts[column] += 1;
                }
            }
        }

        HashtagView::Available(HashtagTrend {
            hashtags,
            entries: by_date
                .into_iter()
                .map(|(date, counts)| HashtagTrendEntry { date, counts })
                .collect(),
        })
    }

    fn hashtag_frequencies(&self) -> HashtagFrequencies {
        count_hashtag_frequencies(self.records.iter().flat_map(|record| record.hashtags()))
    }
}
