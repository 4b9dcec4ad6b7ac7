#[path = "../test_utils/lib.rs"]
mod test_utils;
use test_utils::{FixedScorer, UnavailableScorer};

use hashtag_pulse::{
    Error, LexiconScorer, PolarityClassifier, PolarityScorer, SentimentLabel, TextNormalizer,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier_with_boundaries() -> PolarityClassifier<FixedScorer> {
        PolarityClassifier::new(FixedScorer::new(&[
            ("at positive boundary", 0.05),
            ("just below positive", 0.04999),
            ("at negative boundary", -0.05),
            ("just above negative", -0.0499),
            ("out of range", 1.5),
            ("not a number", f64::NAN),
        ]))
    }

    #[test]
    fn test_threshold_boundaries() {
        let classifier = classifier_with_boundaries();

        let label = |text: &str| classifier.classify(text).unwrap().label;

        assert_eq!(label("at positive boundary"), SentimentLabel::Positive);
        assert_eq!(label("just below positive"), SentimentLabel::Neutral);
        assert_eq!(label("at negative boundary"), SentimentLabel::Negative);
        assert_eq!(label("just above negative"), SentimentLabel::Neutral);
        assert_eq!(label(""), SentimentLabel::Neutral);
    }

    #[test]
    fn test_score_is_reported_with_label() {
        let classifier = classifier_with_boundaries();
        let sentiment = classifier.classify("at negative boundary").unwrap();

        assert_eq!(sentiment.score, -0.05);
        assert_eq!(sentiment.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_out_of_range_scores_are_invalid() {
        let classifier = classifier_with_boundaries();

        assert!(matches!(
            classifier.classify("out of range"),
            Err(Error::InvalidScore(_))
        ));
        assert!(matches!(
            classifier.classify("not a number"),
            Err(Error::InvalidScore(_))
        ));
    }

    #[test]
    fn test_unavailable_scorer_is_reported() {
        let classifier = PolarityClassifier::new(UnavailableScorer);
        let result = classifier.classify("anything");

        match result {
            Err(err @ Error::ScoringUnavailable(_)) => assert!(err.is_fatal()),
            other => panic!("Expected scoring unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_reclassification_is_idempotent() {
        let classifier = PolarityClassifier::new(LexiconScorer::new().unwrap());
        let normalizer = TextNormalizer::new();

        for text in [
            "I absolutely love this!",
            "Not good at all...",
            "The bus arrives at 5",
            "Great food but terrible service",
        ] {
            let cleaned = normalizer.normalize(text);
            let first = classifier.classify(&cleaned).unwrap();
            let second = classifier.classify(&cleaned).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_bundled_lexicon_labels() {
        let classifier = PolarityClassifier::new(LexiconScorer::new().unwrap());
        let normalizer = TextNormalizer::new();

        let label = |text: &str| {
            classifier
                .classify(&normalizer.normalize(text))
                .unwrap()
                .label
        };

        assert_eq!(label("What a wonderful day!"), SentimentLabel::Positive);
        assert_eq!(label("This is the worst service ever."), SentimentLabel::Negative);
        assert_eq!(label("The bus arrives at 5"), SentimentLabel::Neutral);
        assert_eq!(label("I don't like this"), SentimentLabel::Negative);
        assert_eq!(label("Great food but terrible service"), SentimentLabel::Negative);
    }

    #[test]
    fn test_boxed_scorer() {
        let scorer: Box<dyn PolarityScorer> = Box::new(FixedScorer::new(&[("yes", 0.9)]));
        let classifier = PolarityClassifier::new(scorer);

        assert_eq!(
            classifier.classify("yes").unwrap().label,
            SentimentLabel::Positive
        );
    }
}
