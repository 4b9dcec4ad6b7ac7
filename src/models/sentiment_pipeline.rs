use crate::models::{
    Aggregator, EnrichedRecord, HashtagTrend, HashtagView, PolarityClassifier, PolarityScorer,
    Record, RecordSetView, SentimentDistribution, SentimentTimeline, TextNormalizer,
};
use crate::types::HashtagFrequencies;
use crate::Error;
use log::{info, warn};

/// Runs normalization and classification over a loaded record set.
pub struct SentimentPipeline<S: PolarityScorer> {
    normalizer: TextNormalizer,
    classifier: PolarityClassifier<S>,
}

impl<S: PolarityScorer> SentimentPipeline<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            classifier: PolarityClassifier::new(scorer),
        }
    }

    pub fn classifier(&self) -> &PolarityClassifier<S> {
        &self.classifier
    }

    /// Enriches every record with its cleaned text and sentiment.
    ///
    /// Records the scorer cannot produce a valid score for are left out and
    /// counted in `PreparedDataset::skipped_records`.
    ///
    /// # Errors
    ///
    /// Returns the scorer's error as soon as it reports a fatal condition such
    /// as `Error::ScoringUnavailable`; no partial dataset is produced.
    pub fn prepare(&self, records: Vec<Record>) -> Result<PreparedDataset, Error> {
        info!("Normalizing text and classifying polarity...");

        let mut enriched_records = Vec::with_capacity(records.len());
        let mut skipped_records = 0;

        for (index, record) in records.into_iter().enumerate() {
            let cleaned_text = self.normalizer.normalize(record.text());

            match self.classifier.classify(&cleaned_text) {
                Ok(sentiment) => {
                    enriched_records.push(EnrichedRecord::new(record, cleaned_text, sentiment))
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!("Skipping record {}: {}", index + 1, err);
                    skipped_records += 1;
                }
            }
        }

        if skipped_records > 0 {
            warn!(
                "{} of {} records could not be classified",
                skipped_records,
                enriched_records.len() + skipped_records
            );
        }

        Ok(PreparedDataset {
            records: enriched_records,
            skipped_records,
        })
    }
}

/// The enriched record collection of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedDataset {
    records: Vec<EnrichedRecord>,
    skipped_records: usize,
}

impl PreparedDataset {
    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records excluded because they could not be classified.
    pub fn skipped_records(&self) -> usize {
        self.skipped_records
    }

    /// The first `size` enriched records, in input order.
    pub fn sample(&self, size: usize) -> &[EnrichedRecord] {
        &self.records[..size.min(self.records.len())]
    }

    pub fn aggregator(&self) -> Aggregator<'_> {
        Aggregator::new(&self.records)
    }

    pub fn sentiment_distribution(&self) -> RecordSetView<SentimentDistribution> {
        self.aggregator().sentiment_distribution()
    }

    pub fn top_hashtags(&self, limit: usize) -> HashtagView<HashtagFrequencies> {
        self.aggregator().top_hashtags(limit)
    }

    pub fn sentiment_timeline(&self) -> RecordSetView<SentimentTimeline> {
        self.aggregator().sentiment_timeline()
    }

    pub fn hashtag_trend(&self, limit: usize) -> HashtagView<HashtagTrend> {
        self.aggregator().hashtag_trend(limit)
    }
}
