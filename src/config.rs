use crate::models::{AnalysisConfig, LexiconScorerConfig};

pub const DEFAULT_ANALYSIS_CONFIG: &AnalysisConfig = &AnalysisConfig {
    top_hashtag_count: 10,
    trend_hashtag_count: 5,
    sample_size: 10,
};

pub const DEFAULT_LEXICON_SCORER_CONFIG: &LexiconScorerConfig = &LexiconScorerConfig {
    normalization_alpha: 15.0,
    negation_scalar: -0.74,
    booster_increment: 0.293,
    negation_window: 3,
    but_clause_before_weight: 0.5,
    but_clause_after_weight: 1.5,
};
