#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::{DEFAULT_ANALYSIS_CONFIG, DEFAULT_LEXICON_SCORER_CONFIG};
pub mod constants;
pub mod models;
pub use models::{
    Aggregator, AnalysisCache, AnalysisConfig, AnalysisReport, ContentFingerprint,
    EnrichedRecord, Error, HashtagTrend, HashtagView, LexiconScorer, LexiconScorerConfig,
    PolarityClassifier, PolarityScorer, PostLoader, PreparedDataset, Record, RecordSetView,
    SampleRow, Sentiment, SentimentDistribution, SentimentLabel, SentimentPipeline,
    SentimentTimeline, TextNormalizer, VaderScorer,
};
pub mod types;
pub mod utils;
pub use types::{Hashtag, HashtagFrequencies, HashtagFrequency, PolarityScore, PostDate};
use std::path::Path;

/// Runs the whole analysis over CSV text using the VADER scorer.
///
/// # Example
/// ```
/// use hashtag_pulse::{analyze_posts_from_string, HashtagView, DEFAULT_ANALYSIS_CONFIG};
///
/// let csv = "Text,Date,Hashtags\nI love this!,2023-01-15,#Rust\n";
/// let report = analyze_posts_from_string(csv, DEFAULT_ANALYSIS_CONFIG).unwrap();
///
/// let distribution = report.sentiment_distribution.as_available().unwrap();
/// assert_eq!(distribution.positive, 1);
/// assert!(matches!(report.top_hashtags, HashtagView::Available(_)));
/// ```
pub fn analyze_posts_from_string(
    csv_str: &str,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, Error> {
    let records = PostLoader::read_posts_from_string(csv_str)?;
    analyze_records(records, config)
}

/// Runs the whole analysis over a CSV (or gzipped CSV) file using the VADER
/// scorer.
pub fn analyze_posts_from_path(
    path: &Path,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, Error> {
    let records = PostLoader::read_posts_from_path(path)?;
    analyze_records(records, config)
}

/// Runs the whole analysis over raw input bytes using the VADER scorer.
pub fn analyze_posts_from_bytes(
    bytes: &[u8],
    config: &AnalysisConfig,
) -> Result<AnalysisReport, Error> {
    let records = PostLoader::read_posts_from_bytes(bytes)?;
    analyze_records(records, config)
}

fn analyze_records(
    records: Vec<Record>,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, Error> {
    let pipeline = SentimentPipeline::new(VaderScorer::new());
    let dataset = pipeline.prepare(records)?;

    Ok(AnalysisReport::from_dataset(&dataset, config))
}
