use hashtag_pulse::{
    analyze_posts_from_string, HashtagView, RecordSetView, DEFAULT_ANALYSIS_CONFIG,
};

fn main() {
    env_logger::init();

    let csv = "Text,Date,Hashtags\n\
               Loving #AI and #MachineLearning!,2023-01-15,#AI #MachineLearning\n\
               This is terrible,2023-01-15,#AI\n\
               See you at noon,2023-01-16,\n";

    let report = analyze_posts_from_string(csv, DEFAULT_ANALYSIS_CONFIG).unwrap();

    println!("Sentiment distribution for the given posts:");
    if let RecordSetView::Available(distribution) = report.sentiment_distribution {
        for (label, count) in distribution.iter() {
            println!("{}: {}", label, count);
        }
    }

    if let HashtagView::Available(top_hashtags) = report.top_hashtags {
        for (hashtag, frequency) in top_hashtags {
            println!("{}: {}", hashtag, frequency);
        }
    }
}
