use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be read as tabular post data (unparseable CSV, a
    /// missing required column, or a value that cannot be interpreted).
    #[error("Malformed Input Error: {0}")]
    MalformedInput(String),

    /// The polarity scorer could not be reached at all. Aborts the run.
    #[error("Scoring Unavailable Error: {0}")]
    ScoringUnavailable(String),

    /// The polarity scorer produced a score outside of `[-1, 1]` for a single
    /// text. Affects only that record.
    #[error("Invalid Score Error: {0}")]
    InvalidScore(String),

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Whether the error should abort a whole analysis run, as opposed to
    /// excluding a single record from it.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::InvalidScore(_))
    }
}
