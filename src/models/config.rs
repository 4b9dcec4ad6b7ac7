/// Caller-facing knobs for an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Number of hashtags reported by the top hashtag view.
    pub top_hashtag_count: usize,
    /// Number of most frequent hashtags followed by the hashtag trend view.
    pub trend_hashtag_count: usize,
    /// Number of enriched records included in the tabular preview.
    pub sample_size: usize,
}

/// Rule weights used by the bundled `LexiconScorer`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconScorerConfig {
    pub normalization_alpha: f64,
    pub negation_scalar: f64,
    pub booster_increment: f64,
    pub negation_window: usize,
    pub but_clause_before_weight: f64,
    pub but_clause_after_weight: f64,
}
