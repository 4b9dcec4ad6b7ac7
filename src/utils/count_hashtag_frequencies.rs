use crate::types::{Hashtag, HashtagFrequencies};
use std::collections::HashMap;

/// Counts the frequency of hashtags in the given sequence, case-insensitively.
///
/// # Arguments
/// * `hashtags` - The flattened hashtags of a record set, in record order.
///
/// # Returns
/// * A vector of `(lower-cased hashtag, frequency)` pairs, ordered by the
///   position at which each hashtag was first encountered.
///
/// # Example
/// ```
/// use hashtag_pulse::utils::count_hashtag_frequencies;
///
/// let hashtags = vec!["#AI".to_string(), "#rust".to_string(), "#ai".to_string()];
/// let frequencies = count_hashtag_frequencies(hashtags.iter());
/// assert_eq!(
///     frequencies,
///     vec![("#ai".to_string(), 2), ("#rust".to_string(), 1)]
/// );
/// ```
pub fn count_hashtag_frequencies<'a, I>(hashtags: I) -> HashtagFrequencies
where
    I: IntoIterator<Item = &'a Hashtag>,
{
    let mut frequencies: HashtagFrequencies = Vec::new();
    let mut positions: HashMap<Hashtag, usize> = HashMap::new();

    for hashtag in hashtags {
        let folded = hashtag.to_lowercase();

        match positions.get(&folded) {
            Some(&position) => frequencies[position].1 += 1,
            None => {
                positions.insert(folded.clone(), frequencies.len());
                frequencies.push((folded, 1));
            }
        }
    }

    frequencies
}
