use crate::constants::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use crate::types::PolarityScore;
use serde::Serialize;
use std::fmt;

/// Three-way sentiment label derived from a compound polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Every label, in display order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Maps a compound score onto a label.
    ///
    /// Scores in the open interval `(-0.05, 0.05)` are `Neutral`; both
    /// boundary values belong to the polar labels.
    pub fn from_score(score: PolarityScore) -> Self {
        if score >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity score together with the label it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    pub score: PolarityScore,
    pub label: SentimentLabel,
}

impl Sentiment {
    pub fn from_score(score: PolarityScore) -> Self {
        Self {
            score,
            label: SentimentLabel::from_score(score),
        }
    }
}
