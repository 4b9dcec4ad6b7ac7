use crate::types::Hashtag;
use regex::Regex;
use std::sync::LazyLock;

static HASHTAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"));

/// Extracts every `#` followed by one or more word characters from a free-text
/// hashtag field.
///
/// Case is preserved; folding happens at aggregation time. Text without any
/// hashtag yields an empty vector.
///
/// # Example
/// ```
/// use hashtag_pulse::utils::extract_hashtags;
///
/// let hashtags = extract_hashtags("Loving #AI and #MachineLearning!");
/// assert_eq!(hashtags, vec!["#AI", "#MachineLearning"]);
/// ```
pub fn extract_hashtags(raw_hashtag_field: &str) -> Vec<Hashtag> {
    HASHTAG_PATTERN
        .find_iter(raw_hashtag_field)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_order_of_appearance() {
        assert_eq!(
            extract_hashtags("#Travel #Adventure #Travel"),
            vec!["#Travel", "#Adventure", "#Travel"]
        );
    }

    #[test]
    fn test_ignores_bare_hash_and_punctuation() {
        assert_eq!(extract_hashtags("# #! #ok, #fine."), vec!["#ok", "#fine"]);
    }

    #[test]
    fn test_handles_adjacent_tags() {
        assert_eq!(extract_hashtags("#one#two"), vec!["#one", "#two"]);
    }

    #[test]
    fn test_empty_field() {
        assert!(extract_hashtags("").is_empty());
        assert!(extract_hashtags("   no tags here ").is_empty());
    }
}
