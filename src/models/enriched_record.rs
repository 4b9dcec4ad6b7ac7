use crate::models::{Record, Sentiment, SentimentLabel};
use crate::types::{Hashtag, PolarityScore, PostDate};

/// A `Record` plus everything derived from it during preparation.
///
/// Built once by the pipeline and never mutated afterwards. The sentiment is
/// a pure function of `cleaned_text`, which in turn only depends on the
/// record's raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    record: Record,
    cleaned_text: String,
    sentiment: Sentiment,
}

impl EnrichedRecord {
    pub fn new(record: Record, cleaned_text: String, sentiment: Sentiment) -> Self {
        Self {
            record,
            cleaned_text,
            sentiment,
        }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn text(&self) -> &str {
        self.record.text()
    }

    pub fn date(&self) -> PostDate {
        self.record.date()
    }

    pub fn hashtags(&self) -> &[Hashtag] {
        self.record.hashtags()
    }

    pub fn cleaned_text(&self) -> &str {
        &self.cleaned_text
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    pub fn sentiment_label(&self) -> SentimentLabel {
        self.sentiment.label
    }

    pub fn polarity_score(&self) -> PolarityScore {
        self.sentiment.score
    }

    /// Case-insensitive hashtag membership test.
    ///
    /// `folded_hashtag` is expected to already be lower-cased.
    pub fn has_hashtag(&self, folded_hashtag: &str) -> bool {
        self.hashtags()
            .iter()
            .any(|hashtag| hashtag.to_lowercase() == folded_hashtag)
    }
}
