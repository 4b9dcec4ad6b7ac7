use clap::Parser;
use hashtag_pulse::constants::{
    NO_HASHTAGS_MESSAGE, NO_HASHTAG_TRENDS_MESSAGE, NO_RECORDS_MESSAGE,
};
use hashtag_pulse::{
    analyze_posts_from_bytes, AnalysisConfig, AnalysisReport, HashtagView, RecordSetView,
    SentimentLabel, DEFAULT_ANALYSIS_CONFIG,
};
use log::{error, info};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

/// Command-line arguments for hashtag-pulse-cli
#[derive(Parser, Debug)]
#[command(name = "hashtag-pulse-cli")]
#[command(about = "Labels post sentiment and summarizes hashtag trends from a CSV of posts")]
#[command(version)]
struct Args {
    /// CSV or gzipped CSV of posts; stdin is read when omitted or `-`
    input: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Number of hashtags in the top hashtags view
    #[arg(long, value_name = "N", default_value_t = DEFAULT_ANALYSIS_CONFIG.top_hashtag_count)]
    top: usize,

    /// Number of hashtags followed in the hashtag trend view
    #[arg(long, value_name = "K", default_value_t = DEFAULT_ANALYSIS_CONFIG.trend_hashtag_count)]
    trend: usize,

    /// Number of posts shown in the sample preview
    #[arg(long, value_name = "ROWS", default_value_t = DEFAULT_ANALYSIS_CONFIG.sample_size)]
    sample: usize,
}

impl Args {
    fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            top_hashtag_count: self.top,
            trend_hashtag_count: self.trend,
            sample_size: self.sample,
        }
    }
}

fn read_input(input_path: Option<&Path>) -> io::Result<Vec<u8>> {
    match input_path {
        Some(path) => fs::read(path),
        None => {
            let mut input = Vec::new();
            io::stdin().read_to_end(&mut input)?;
            Ok(input)
        }
    }
}

fn print_report(report: &AnalysisReport) {
    println!("Sample Data");
    for row in &report.sample {
        println!("{}\t{}\t{}", row.date, row.sentiment, row.text);
    }

    println!();
    println!("Sentiment Distribution");
    match &report.sentiment_distribution {
        RecordSetView::NoRecords => println!("{}", NO_RECORDS_MESSAGE),
        RecordSetView::Available(distribution) => {
            for (label, count) in distribution.iter() {
                println!("{}: {}", label, count);
            }
        }
    }

    println!();
    println!("Top {} Hashtags", report.top_hashtag_count);
    match &report.top_hashtags {
        HashtagView::NoHashtags => println!("{}", NO_HASHTAGS_MESSAGE),
        HashtagView::Available(ranked) => {
            for (hashtag, frequency) in ranked {
                println!("{}: {}", hashtag, frequency);
            }
        }
    }

    println!();
    println!("Sentiment Trends Over Time");
    match &report.sentiment_timeline {
        RecordSetView::NoRecords => println!("{}", NO_RECORDS_MESSAGE),
        RecordSetView::Available(timeline) => {
            let labels: Vec<&str> = SentimentLabel::ALL.iter().map(|l| l.as_str()).collect();
            println!("Date\t{}", labels.join("\t"));
            for entry in &timeline.entries {
                let counts: Vec<String> = entry
                    .counts
                    .iter()
                    .map(|(_, count)| count.to_string())
                    .collect();
                println!("{}\t{}", entry.date, counts.join("\t"));
            }
        }
    }

    println!();
    println!("Hashtag Trends Over Time");
    match &report.hashtag_trend {
        HashtagView::NoHashtags => println!("{}", NO_HASHTAG_TRENDS_MESSAGE),
        HashtagView::Available(trend) => {
            println!("Date\t{}", trend.hashtags.join("\t"));
            for entry in &trend.entries {
                let counts: Vec<String> =
                    entry.counts.iter().map(|count| count.to_string()).collect();
                println!("{}\t{}", entry.date, counts.join("\t"));
            }
        }
    }

    if report.skipped_records > 0 {
        println!();
        println!(
            "{} records could not be classified and were left out.",
            report.skipped_records
        );
    }
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args = Args::parse();

    // Read the input CSV from the given path or stdin
    let input = match read_input(args.input_path()) {
        Ok(input) => input,
        Err(e) => {
            error!("Failed to read input: {}", e);
            eprintln!("Failed to read input: {}", e);
            process::exit(1);
        }
    };

    info!("Read {} bytes of input", input.len());

    match analyze_posts_from_bytes(&input, &args.analysis_config()) {
        Ok(report) => {
            if args.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize report: {}", e);
                        process::exit(1);
                    }
                }
            } else {
                print_report(&report);
            }
        }
        Err(e) => {
            error!("Error analyzing posts: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
