use serde::Serialize;

/// Result of a hashtag-dependent aggregation.
///
/// `NoHashtags` is reported when there is no hashtag to show, either because no
/// record carries one or because zero were asked for. The presentation layer
/// can then explain the absence instead of drawing an empty chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum HashtagView<T> {
    NoHashtags,
    Available(T),
}

impl<T> HashtagView<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, HashtagView::Available(_))
    }

    pub fn as_available(&self) -> Option<&T> {
        match self {
            HashtagView::Available(view) => Some(view),
            HashtagView::NoHashtags => None,
        }
    }

    pub fn into_available(self) -> Option<T> {
        match self {
            HashtagView::Available(view) => Some(view),
            HashtagView::NoHashtags => None,
        }
    }
}
