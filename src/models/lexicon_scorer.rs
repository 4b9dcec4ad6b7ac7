use crate::config::DEFAULT_LEXICON_SCORER_CONFIG;
use crate::constants::{
    BOOSTER_WORDS, COMPRESSED_SENTIMENT_LEXICON_BYTES, DAMPENER_WORDS, NEGATION_WORDS,
};
use crate::models::{LexiconScorerConfig, PolarityScorer};
use crate::types::PolarityScore;
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::debug;
use std::collections::HashMap;
use std::io::{Cursor, Read};

/// Decay applied to a booster's increment for every token between it and the
/// word it modifies.
const BOOSTER_DISTANCE_DECAY: f64 = 0.05;

const CONTRAST_WORD: &str = "but";

/// Rule-based scorer over a word valence lexicon.
///
/// Word valences are summed (with negation, intensity and contrast rules
/// applied) and squashed into a compound score in `[-1, 1]`.
pub struct LexiconScorer {
    valences: HashMap<String, f64>,
    config: LexiconScorerConfig,
}

impl LexiconScorer {
    /// Builds a scorer over the lexicon bundled with the crate.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(*DEFAULT_LEXICON_SCORER_CONFIG)
    }

    pub fn with_config(config: LexiconScorerConfig) -> Result<Self, Error> {
        let lexicon_csv = Self::decompress_lexicon(COMPRESSED_SENTIMENT_LEXICON_BYTES)?;
        let mut scorer = Self::from_csv_str(&lexicon_csv)?;
        scorer.config = config;

        Ok(scorer)
    }

    /// Builds a scorer from a `Token,Valence` CSV string.
    ///
    /// # Errors
    ///
    /// Returns `Error::ScoringUnavailable` if the lexicon cannot be parsed,
    /// since no score could be trusted without it.
    pub fn from_csv_str(csv_str: &str) -> Result<Self, Error> {
        let mut valences = HashMap::new();

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(Cursor::new(csv_str));

        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                Error::ScoringUnavailable(format!("Failed to read lexicon entry: {}", e))
            })?;

            let token = record.get(0).map(str::trim).unwrap_or_default();
            let valence = record
                .get(1)
                .and_then(|value| value.trim().parse::<f64>().ok())
                .ok_or_else(|| {
                    Error::ScoringUnavailable(format!(
                        "Invalid valence for lexicon entry {}",
                        index + 1
                    ))
                })?;

            if !token.is_empty() {
                valences.insert(token.to_lowercase(), valence);
            }
        }

        if valences.is_empty() {
            return Err(Error::ScoringUnavailable(
                "Sentiment lexicon is empty".to_string(),
            ));
        }

        debug!("Loaded sentiment lexicon with {} entries", valences.len());

        Ok(Self {
            valences,
            config: *DEFAULT_LEXICON_SCORER_CONFIG,
        })
    }

    fn decompress_lexicon(read_bytes: &[u8]) -> Result<String, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data).map_err(|e| {
            Error::ScoringUnavailable(format!("Failed to decompress sentiment lexicon: {}", e))
        })?;

        Ok(decompressed_data)
    }

    pub fn config(&self) -> &LexiconScorerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    /// Valence of a single token, ignoring a leading `#` or `@`.
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(Self::lookup_key(token)).copied()
    }

    fn lookup_key(token: &str) -> &str {
        token.trim_start_matches(['#', '@'])
    }

    /// Adjustment a modifier token contributes to a valence of the given sign.
    fn scalar_adjustment(modifier: &str, valence: f64, increment: f64) -> f64 {
        let magnitude = if BOOSTER_WORDS.contains(&modifier) {
            increment
        } else if DAMPENER_WORDS.contains(&modifier) {
            -increment
        } else {
            return 0.0;
        };

        if valence < 0.0 {
            -magnitude
        } else {
            magnitude
        }
    }

    fn token_valence(&self, tokens: &[&str], index: usize) -> f64 {
        let token = Self::lookup_key(tokens[index]);

        // Modifiers never carry sentiment of their own
        if BOOSTER_WORDS.contains(&token) || DAMPENER_WORDS.contains(&token) {
            return 0.0;
        }

        let Some(mut valence) = self.valences.get(token).copied() else {
            return 0.0;
        };

        let window_start = index.saturating_sub(self.config.negation_window);
        let mut negated = false;

        for (distance, preceding) in tokens[window_start..index].iter().rev().enumerate() {
            let preceding = Self::lookup_key(preceding);
            let decay = 1.0 - BOOSTER_DISTANCE_DECAY * distance as f64;
            valence += Self::scalar_adjustment(
                preceding,
                valence,
                self.config.booster_increment * decay,
            );

            if NEGATION_WORDS.contains(&preceding) {
                negated = true;
            }
        }

        if negated {
            valence *= self.config.negation_scalar;
        }

        valence
    }

    fn normalize(&self, sum: f64) -> PolarityScore {
        let score = sum / (sum * sum + self.config.normalization_alpha).sqrt();
        score.clamp(-1.0, 1.0)
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity_score(&self, text: &str) -> Result<PolarityScore, Error> {
        let tokens: Vec<&str> = text.split_whitespace().collect();

        if tokens.is_empty() {
            return Ok(0.0);
        }

        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|index| self.token_valence(&tokens, index))
            .collect();

        if let Some(contrast_index) = tokens.iter().position(|token| *token == CONTRAST_WORD) {
            for (index, valence) in valences.iter_mut().enumerate() {
                if index < contrast_index {
                    *valence *= self.config.but_clause_before_weight;
                } else if index > contrast_index {
                    *valence *= self.config.but_clause_after_weight;
                }
            }
        }

        let sum: f64 = valences.iter().sum();

        Ok(self.normalize(sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> LexiconScorer {
        LexiconScorer::from_csv_str("Token,Valence\ngood,1.9\nbad,-2.5\nlove,3.2\n")
            .expect("Failed to build lexicon scorer")
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(scorer().polarity_score("").unwrap(), 0.0);
        assert_eq!(scorer().polarity_score("   ").unwrap(), 0.0);
    }

    #[test]
    fn test_unknown_words_are_neutral() {
        assert_eq!(scorer().polarity_score("the meeting is at noon").unwrap(), 0.0);
    }

    #[test]
    fn test_single_word_normalization() {
        let score = scorer().polarity_score("love").unwrap();
        let expected = 3.2 / (3.2f64 * 3.2 + 15.0).sqrt();
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let plain = scorer().polarity_score("this is good").unwrap();
        let negated = scorer().polarity_score("this is not good").unwrap();
        assert!(plain > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn test_booster_increases_magnitude() {
        let plain = scorer().polarity_score("good").unwrap();
        let boosted = scorer().polarity_score("very good").unwrap();
        assert!(boosted > plain);

        let plain = scorer().polarity_score("bad").unwrap();
        let boosted = scorer().polarity_score("very bad").unwrap();
        assert!(boosted < plain);
    }

    #[test]
    fn test_dampener_decreases_magnitude() {
        let plain = scorer().polarity_score("good").unwrap();
        let dampened = scorer().polarity_score("slightly good").unwrap();
        assert!(dampened < plain);
        assert!(dampened > 0.0);
    }

    #[test]
    fn test_contrast_favors_second_clause() {
        let score = scorer().polarity_score("good but bad").unwrap();
        assert!(score < 0.0);
    }

    #[test]
    fn test_hashtag_prefix_is_ignored_for_lookup() {
        assert_eq!(scorer().valence("#love"), Some(3.2));
        assert_eq!(scorer().valence("@bad"), Some(-2.5));
    }

    #[test]
    fn test_scores_stay_in_range() {
        let text = std::iter::repeat("love").take(500).collect::<Vec<_>>().join(" ");
        let score = scorer().polarity_score(&text).unwrap();
        assert!(score <= 1.0 && score > 0.99);
    }

    #[test]
    fn test_bundled_lexicon_loads() {
        let scorer = LexiconScorer::new().expect("Failed to load bundled lexicon");
        assert!(!scorer.is_empty());
        assert!(scorer.polarity_score("i love this").unwrap() >= 0.05);
        assert!(scorer.polarity_score("this is terrible").unwrap() <= -0.05);
    }

    #[test]
    fn test_invalid_lexicon_is_unavailable() {
        let result = LexiconScorer::from_csv_str("Token,Valence\ngood,abc\n");
        assert!(matches!(result, Err(Error::ScoringUnavailable(_))));

        let result = LexiconScorer::from_csv_str("Token,Valence\n");
        assert!(matches!(result, Err(Error::ScoringUnavailable(_))));
    }
}
