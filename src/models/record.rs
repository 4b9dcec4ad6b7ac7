use crate::types::{Hashtag, PassThroughField, PostDate};
use crate::utils::extract_hashtags;

/// A single post as loaded from the tabular input.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    text: String,
    date: PostDate,
    raw_hashtags: Option<String>,
    hashtags: Vec<Hashtag>,
    pass_through_fields: Vec<PassThroughField>,
}

impl Record {
    /// Builds a record, deriving its hashtag sequence from `raw_hashtags`.
    pub fn new(text: impl Into<String>, date: PostDate, raw_hashtags: Option<String>) -> Self {
        Self::with_pass_through_fields(text, date, raw_hashtags, Vec::new())
    }

    pub fn with_pass_through_fields(
        text: impl Into<String>,
        date: PostDate,
        raw_hashtags: Option<String>,
        pass_through_fields: Vec<PassThroughField>,
    ) -> Self {
        let hashtags = raw_hashtags
            .as_deref()
            .map(extract_hashtags)
            .unwrap_or_default();

        Self {
            text: text.into(),
            date,
            raw_hashtags,
            hashtags,
            pass_through_fields,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn date(&self) -> PostDate {
        self.date
    }

    pub fn raw_hashtags(&self) -> Option<&str> {
        self.raw_hashtags.as_deref()
    }

    /// Hashtags as written in the input, case preserved, in order of appearance.
    pub fn hashtags(&self) -> &[Hashtag] {
        &self.hashtags
    }

    /// Columns other than `Text`, `Date` and `Hashtags`, in header order.
    pub fn pass_through_fields(&self) -> &[PassThroughField] {
        &self.pass_through_fields
    }
}
