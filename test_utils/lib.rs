#![allow(dead_code)] // Not every helper is used by every test file

pub mod constants;

use chrono::NaiveDate;
use csv::WriterBuilder;
use flate2::write::GzEncoder;
use flate2::Compression;
use hashtag_pulse::{Error, PolarityScore, PolarityScorer};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Scorer returning pre-assigned scores for exact cleaned texts and `0.0` for
/// anything else. Keeps aggregation tests independent of the bundled lexicon.
pub struct FixedScorer {
    scores: HashMap<String, PolarityScore>,
}

impl FixedScorer {
    pub fn new(scores: &[(&str, PolarityScore)]) -> Self {
        Self {
            scores: scores
                .iter()
                .map(|(text, score)| (text.to_string(), *score))
                .collect(),
        }
    }
}

impl PolarityScorer for FixedScorer {
    fn polarity_score(&self, text: &str) -> Result<PolarityScore, Error> {
        Ok(self.scores.get(text).copied().unwrap_or(0.0))
    }
}

/// Scorer that can never be reached.
pub struct UnavailableScorer;

impl PolarityScorer for UnavailableScorer {
    fn polarity_score(&self, _text: &str) -> Result<PolarityScore, Error> {
        Err(Error::ScoringUnavailable(
            "Scoring backend is offline".to_string(),
        ))
    }
}

/// Builds a `Text,Date,Hashtags` CSV string from `(text, date, hashtags)` rows.
pub fn posts_csv(rows: &[(&str, &str, &str)]) -> String {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer
        .write_record(["Text", "Date", "Hashtags"])
        .expect("Failed to write header");

    for (text, date, hashtags) in rows {
        writer
            .write_record([*text, *date, *hashtags])
            .expect("Failed to write row");
    }

    let bytes = writer.into_inner().expect("Failed to flush CSV writer");
    String::from_utf8(bytes).expect("CSV output is not UTF-8")
}

pub fn gzip_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).expect("Failed to compress bytes");
    encoder.finish().expect("Failed to finalize compression")
}

pub fn read_fixture(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read test file")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Invalid test date")
}
