use chrono::NaiveDate;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a hashtag token (including its leading `#`) as an owned `String`.
pub type Hashtag = String;

/// Represents the total number of occurrences of a hashtag across a record set.
pub type HashtagFrequency = usize;

/// Case-folded hashtags paired with their frequency counts, in the order each
/// hashtag was first encountered.
pub type HashtagFrequencies = Vec<(Hashtag, HashtagFrequency)>;

/// The calendar date a post was published on. Time-of-day is never retained.
pub type PostDate = NaiveDate;

/// A compound polarity score in `[-1, 1]`.
pub type PolarityScore = f64;

/// Name of a column in the tabular input.
pub type ColumnName = String;

/// A column name paired with the raw value found in that column for one row.
/// Used for columns which are carried along but not interpreted.
pub type PassThroughField = (ColumnName, String);

/// The number of records matching some criterion.
pub type RecordCount = usize;
