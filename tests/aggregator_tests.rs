#[path = "../test_utils/lib.rs"]
mod test_utils;
use test_utils::{date, posts_csv, FixedScorer};

use hashtag_pulse::{
    HashtagView, PostLoader, PreparedDataset, RecordSetView, SentimentLabel, SentimentPipeline,
};

fn prepare(rows: &[(&str, &str, &str)], scores: &[(&str, f64)]) -> PreparedDataset {
    let records =
        PostLoader::read_posts_from_string(&posts_csv(rows)).expect("Failed to load posts");

    SentimentPipeline::new(FixedScorer::new(scores))
        .prepare(records)
        .expect("Failed to prepare posts")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORES: &[(&str, f64)] = &[("up", 0.8), ("down", -0.8), ("meh", 0.0)];

    #[test]
    fn test_distribution_keeps_zero_labels_in_order() {
        let dataset = prepare(
            &[("up", "2023-01-01", ""), ("Up!", "2023-01-02", "")],
            SCORES,
        );
        let distribution = dataset
            .sentiment_distribution()
            .into_available()
            .expect("Expected a sentiment distribution");

        assert_eq!(
            distribution.iter().collect::<Vec<_>>(),
            vec![
                (SentimentLabel::Positive, 2),
                (SentimentLabel::Neutral, 0),
                (SentimentLabel::Negative, 0)
            ]
        );
        assert_eq!(distribution.total(), 2);
    }

    #[test]
    fn test_top_hashtags_breaks_ties_by_first_seen_order() {
        let dataset = prepare(
            &[
                ("meh", "2023-01-01", "#a #b"),
                ("meh", "2023-01-01", "#c #b"),
                ("meh", "2023-01-02", "#a"),
                ("meh", "2023-01-02", "#B #A"),
            ],
            SCORES,
        );

        assert_eq!(
            dataset.top_hashtags(2),
            HashtagView::Available(vec![("#a".to_string(), 3), ("#b".to_string(), 3)])
        );
    }

    #[test]
    fn test_top_hashtags_folds_case() {
        let dataset = prepare(
            &[
                ("meh", "2023-01-01", "#Rust"),
                ("meh", "2023-01-01", "#RUST #go"),
                ("meh", "2023-01-01", "#rust"),
            ],
            SCORES,
        );

        assert_eq!(
            dataset.top_hashtags(10),
            HashtagView::Available(vec![("#rust".to_string(), 3), ("#go".to_string(), 1)])
        );
    }

    #[test]
    fn test_top_hashtags_counts_repeats_within_a_record() {
        let dataset = prepare(&[("meh", "2023-01-01", "#x #x #y")], SCORES);

        assert_eq!(
            dataset.top_hashtags(10),
            HashtagView::Available(vec![("#x".to_string(), 2), ("#y".to_string(), 1)])
        );
    }

    #[test]
    fn test_zero_limit_signals_no_hashtags() {
        let dataset = prepare(&[("meh", "2023-01-01", "#x")], SCORES);

        assert_eq!(dataset.top_hashtags(0), HashtagView::NoHashtags);
        assert_eq!(dataset.hashtag_trend(0), HashtagView::NoHashtags);
        assert!(dataset.top_hashtags(1).is_available());
    }

    #[test]
    fn test_sentiment_timeline_is_dense() {
        let dataset = prepare(
            &[
                ("up", "2023-01-02", ""),
                ("down", "2023-01-01", ""),
                ("meh", "2023-01-01", ""),
                ("up", "2023-01-01 18:00:00", ""),
                ("meh", "2023-01-02", ""),
            ],
            SCORES,
        );
        let timeline = dataset
            .sentiment_timeline()
            .into_available()
            .expect("Expected a sentiment timeline");

        assert_eq!(
            timeline.dates().collect::<Vec<_>>(),
            vec![date(2023, 1, 1), date(2023, 1, 2)]
        );
        assert_eq!(
            timeline.count(date(2023, 1, 1), SentimentLabel::Positive),
            Some(1)
        );
        assert_eq!(
            timeline.count(date(2023, 1, 1), SentimentLabel::Negative),
            Some(1)
        );
        assert_eq!(
            timeline.count(date(2023, 1, 2), SentimentLabel::Negative),
            Some(0)
        );
        assert_eq!(
            timeline.count(date(2023, 1, 3), SentimentLabel::Negative),
            None
        );
    }

    #[test]
    fn test_hashtag_trend_is_dense_over_observed_dates() {
        let dataset = prepare(
            &[
                ("meh", "2023-01-01", "#a #b"),
                ("meh", "2023-01-01", "#A #a"),
                ("meh", "2023-01-02", "#c"),
                ("meh", "2023-01-03", "#b"),
                ("meh", "2023-01-03", "#c"),
            ],
            SCORES,
        );

        let trend = dataset
            .hashtag_trend(2)
            .into_available()
            .expect("Expected hashtag trend");

        assert_eq!(trend.hashtags, vec!["#a", "#b"]);
        assert_eq!(
            trend.series("#a"),
            Some(vec![
                (date(2023, 1, 1), 2),
                (date(2023, 1, 2), 0),
                (date(2023, 1, 3), 0)
            ])
        );
        assert_eq!(
            trend.series("#B"),
            Some(vec![
                (date(2023, 1, 1), 1),
                (date(2023, 1, 2), 0),
                (date(2023, 1, 3), 1)
            ])
        );
        assert_eq!(trend.count(date(2023, 1, 2), "#c"), None);
    }

    #[test]
    fn test_no_hashtags_is_signaled_by_both_views() {
        let dataset = prepare(
            &[("up", "2023-01-01", ""), ("down", "2023-01-02", "no tags here")],
            SCORES,
        );

        assert_eq!(dataset.top_hashtags(10), HashtagView::NoHashtags);
        assert_eq!(dataset.hashtag_trend(5), HashtagView::NoHashtags);
    }

    #[test]
    fn test_empty_record_set() {
        let dataset = prepare(&[], SCORES);

        assert!(dataset.is_empty());
        assert_eq!(dataset.sentiment_distribution(), RecordSetView::NoRecords);
        assert_eq!(dataset.sentiment_timeline(), RecordSetView::NoRecords);
        assert_eq!(dataset.top_hashtags(10), HashtagView::NoHashtags);
        assert_eq!(dataset.hashtag_trend(5), HashtagView::NoHashtags);
    }

    #[test]
    fn test_no_records_differs_from_zero_counts() {
        let empty = prepare(&[], SCORES);
        let neutral_only = prepare(&[("meh", "2023-01-01", "")], SCORES);

        let counts = neutral_only
            .sentiment_distribution()
            .into_available()
            .expect("Expected a sentiment distribution");
        assert_eq!(counts.positive, 0);
        assert_eq!(counts.negative, 0);

        assert_ne!(
            serde_json::to_value(empty.sentiment_distribution()).unwrap(),
            serde_json::to_value(neutral_only.sentiment_distribution()).unwrap()
        );
        assert_eq!(
            serde_json::to_value(empty.sentiment_timeline()).unwrap(),
            serde_json::json!({ "status": "no_records" })
        );
    }

    #[test]
    fn test_views_are_order_independent() {
        let dataset = prepare(
            &[
                ("up", "2023-01-01", "#a"),
                ("down", "2023-01-02", "#b #a"),
            ],
            SCORES,
        );
        let aggregator = dataset.aggregator();

        let trend_first = aggregator.hashtag_trend(5);
        let top_first = aggregator.top_hashtags(10);
        let timeline = aggregator.sentiment_timeline();

        assert_eq!(aggregator.top_hashtags(10), top_first);
        assert_eq!(aggregator.hashtag_trend(5), trend_first);
        assert_eq!(aggregator.sentiment_timeline(), timeline);
    }
}
