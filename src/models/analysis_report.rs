use crate::models::{
    AnalysisConfig, EnrichedRecord, HashtagTrend, HashtagView, PreparedDataset, RecordSetView,
    SentimentDistribution, SentimentLabel, SentimentTimeline,
};
use crate::types::{HashtagFrequencies, PolarityScore, PostDate};
use serde::Serialize;

/// One row of the tabular preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow {
    pub date: PostDate,
    pub text: String,
    pub cleaned_text: String,
    pub sentiment: SentimentLabel,
    pub score: PolarityScore,
}

impl From<&EnrichedRecord> for SampleRow {
    fn from(record: &EnrichedRecord) -> Self {
        Self {
            date: record.date(),
            text: record.text().to_string(),
            cleaned_text: record.cleaned_text().to_string(),
            sentiment: record.sentiment_label(),
            score: record.polarity_score(),
        }
    }
}

/// Every output handed to the presentation layer for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub record_count: usize,
    pub skipped_records: usize,
    pub sample: Vec<SampleRow>,
    pub sentiment_distribution: RecordSetView<SentimentDistribution>,
    pub top_hashtag_count: usize,
    pub top_hashtags: HashtagView<HashtagFrequencies>,
    pub sentiment_timeline: RecordSetView<SentimentTimeline>,
    pub trend_hashtag_count: usize,
    pub hashtag_trend: HashtagView<HashtagTrend>,
}

impl AnalysisReport {
    pub fn from_dataset(dataset: &PreparedDataset, config: &AnalysisConfig) -> Self {
        let aggregator = dataset.aggregator();

        Self {
            record_count: dataset.len(),
            skipped_records: dataset.skipped_records(),
            sample: dataset
                .sample(config.sample_size)
                .iter()
                .map(SampleRow::from)
                .collect(),
            sentiment_distribution: aggregator.sentiment_distribution(),
            top_hashtag_count: config.top_hashtag_count,
            top_hashtags: aggregator.top_hashtags(config.top_hashtag_count),
            sentiment_timeline: aggregator.sentiment_timeline(),
            trend_hashtag_count: config.trend_hashtag_count,
            hashtag_trend: aggregator.hashtag_trend(config.trend_hashtag_count),
        }
    }
}
