use crate::models::{PolarityScorer, Sentiment};
use crate::Error;

/// Turns normalized text into a `Sentiment` by thresholding the score of an
/// injected `PolarityScorer`.
///
/// The classifier holds no state between calls, so classifying the same text
/// twice always yields the same label.
pub struct PolarityClassifier<S: PolarityScorer> {
    scorer: S,
}

impl<S: PolarityScorer> PolarityClassifier<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Scores and labels a single cleaned text.
    ///
    /// # Errors
    ///
    /// Passes scorer errors through unchanged. A score that is not a finite
    /// number in `[-1, 1]` is reported as `Error::InvalidScore`.
    pub fn classify(&self, cleaned_text: &str) -> Result<Sentiment, Error> {
        let score = self.scorer.polarity_score(cleaned_text)?;

        if !score.is_finite() || !(-1.0..=1.0).contains(&score) {
            return Err(Error::InvalidScore(format!(
                "Score {} for {:?} is outside of [-1, 1]",
                score, cleaned_text
            )));
        }

        Ok(Sentiment::from_score(score))
    }
}
