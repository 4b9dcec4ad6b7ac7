use crate::models::PolarityScorer;
use crate::types::PolarityScore;
use crate::Error;
use vader_sentiment::SentimentIntensityAnalyzer;

const COMPOUND_SCORE_KEY: &str = "compound";

/// Default scorer, backed by the full VADER lexicon and rule set.
///
/// The compound score VADER reports is already normalized into `[-1, 1]`.
#[derive(Copy, Clone, Debug, Default)]
pub struct VaderScorer;

impl VaderScorer {
    pub fn new() -> Self {
        Self
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity_score(&self, text: &str) -> Result<PolarityScore, Error> {
        let analyzer = SentimentIntensityAnalyzer::new();
        let compound = analyzer.polarity_scores(text).get(COMPOUND_SCORE_KEY).copied();

        compound.ok_or_else(|| {
            Error::ScoringUnavailable(format!(
                "VADER did not report a {} score",
                COMPOUND_SCORE_KEY
            ))
        })
    }
}
