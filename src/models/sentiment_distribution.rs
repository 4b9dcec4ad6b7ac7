use crate::models::SentimentLabel;
use crate::types::RecordCount;
use serde::Serialize;

/// Number of records per sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: RecordCount,
    pub neutral: RecordCount,
    pub negative: RecordCount,
}

impl SentimentDistribution {
    pub fn increment(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    pub fn count(&self, label: SentimentLabel) -> RecordCount {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    pub fn total(&self) -> RecordCount {
        self.positive + self.neutral + self.negative
    }

    /// `(label, count)` pairs in display order, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (SentimentLabel, RecordCount)> + '_ {
        SentimentLabel::ALL
            .into_iter()
            .map(move |label| (label, self.count(label)))
    }
}

impl FromIterator<SentimentLabel> for SentimentDistribution {
    fn from_iter<I: IntoIterator<Item = SentimentLabel>>(labels: I) -> Self {
        let mut distribution = Self::default();
        for label in labels {
            distribution.increment(label);
        }
        distribution
    }
}
