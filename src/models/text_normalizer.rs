use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+").expect("URL pattern is valid"));

static NOISE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\s#@]").expect("noise pattern is valid"));

#[derive(Copy, Clone, Debug, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalizes free post text ahead of polarity scoring.
    ///
    /// Lower-case `http` links are dropped, then everything other than ASCII letters, digits,
    /// whitespace, `#` and `@` is stripped, so hashtags and mentions survive as
    /// tokens. The result is lower-cased and trimmed.
    ///
    /// Note: Inner whitespace is left as is; removing a URL between two words
    /// leaves both surrounding spaces in place.
    pub fn normalize(self, text: &str) -> String {
        let without_urls = URL_PATTERN.replace_all(text, "");
        let without_noise = NOISE_PATTERN.replace_all(&without_urls, "");

        without_noise.to_lowercase().trim().to_string()
    }
}
