use crate::types::HashtagFrequencies;

/// Ranks hashtag frequencies and keeps the `limit` most frequent.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** Ties keep their incoming order. When the input comes from
///   `count_hashtag_frequencies`, that is the order in which each hashtag was
///   first encountered.
///
/// ### Example:
/// ```rust
/// use hashtag_pulse::utils::rank_by_frequency;
///
/// let frequencies = vec![
///     ("#a".to_string(), 3),
///     ("#c".to_string(), 1),
///     ("#b".to_string(), 3),
/// ];
///
/// let ranked = rank_by_frequency(frequencies, 2);
/// assert_eq!(ranked, vec![("#a".to_string(), 3), ("#b".to_string(), 3)]);
/// ```
pub fn rank_by_frequency(mut frequencies: HashtagFrequencies, limit: usize) -> HashtagFrequencies {
    // `sort_by` is stable, which is what keeps ties in first-seen order
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    frequencies.truncate(limit);

    frequencies
}
