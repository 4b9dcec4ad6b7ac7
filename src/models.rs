pub mod aggregator;
pub use aggregator::Aggregator;

pub mod analysis_cache;
pub use analysis_cache::AnalysisCache;

pub mod analysis_report;
pub use analysis_report::{AnalysisReport, SampleRow};

pub mod config;
pub use config::{AnalysisConfig, LexiconScorerConfig};

pub mod content_fingerprint;
pub use content_fingerprint::ContentFingerprint;

pub mod enriched_record;
pub use enriched_record::EnrichedRecord;

pub mod error;
pub use error::Error;

pub mod hashtag_trend;
pub use hashtag_trend::{HashtagTrend, HashtagTrendEntry};

pub mod hashtag_view;
pub use hashtag_view::HashtagView;

pub mod lexicon_scorer;
pub use lexicon_scorer::LexiconScorer;

pub mod polarity_classifier;
pub use polarity_classifier::PolarityClassifier;

pub mod polarity_scorer;
pub use polarity_scorer::PolarityScorer;

pub mod post_loader;
pub use post_loader::PostLoader;

pub mod record;
pub use record::Record;

pub mod record_set_view;
pub use record_set_view::RecordSetView;

pub mod sentiment_distribution;
pub use sentiment_distribution::SentimentDistribution;

pub mod sentiment_label;
pub use sentiment_label::{Sentiment, SentimentLabel};

pub mod sentiment_pipeline;
pub use sentiment_pipeline::{PreparedDataset, SentimentPipeline};

pub mod sentiment_timeline;
pub use sentiment_timeline::{SentimentTimeline, SentimentTimelineEntry};

pub mod text_normalizer;
pub use text_normalizer::TextNormalizer;

pub mod vader_scorer;
pub use vader_scorer::VaderScorer;
