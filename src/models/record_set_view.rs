use serde::Serialize;

/// Result of an aggregation over the whole record set.
///
/// `NoRecords` is reported when the input held no classified records, so the
/// presentation layer can explain the absence instead of showing a row of
/// zero counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum RecordSetView<T> {
    NoRecords,
    Available(T),
}

impl<T> RecordSetView<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, RecordSetView::Available(_))
    }

    pub fn as_available(&self) -> Option<&T> {
        match self {
            RecordSetView::Available(view) => Some(view),
            RecordSetView::NoRecords => None,
        }
    }

    pub fn into_available(self) -> Option<T> {
        match self {
            RecordSetView::Available(view) => Some(view),
            RecordSetView::NoRecords => None,
        }
    }
}
