use crate::types::PolarityScore;
use crate::Error;

/// Narrow seam between the classifier and whatever produces polarity scores.
///
/// Implementations must be total over strings (including the empty string)
/// and return a compound score in `[-1, 1]`. `Error::ScoringUnavailable`
/// signals that the scorer cannot be used at all and aborts the run; any other
/// error only excludes the offending record.
pub trait PolarityScorer {
    fn polarity_score(&self, text: &str) -> Result<PolarityScore, Error>;
}

impl<T: PolarityScorer + ?Sized> PolarityScorer for Box<T> {
    fn polarity_score(&self, text: &str) -> Result<PolarityScore, Error> {
        (**self).polarity_score(text)
    }
}
