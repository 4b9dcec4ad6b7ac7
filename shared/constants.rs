use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! path_from_segments {
    ($($segment:expr),+ $(,)?) => {
        [$($segment),+].into_iter().collect::<PathBuf>()
    };
}

// Paths relative to the crate root
pub static SENTIMENT_LEXICON_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| path_from_segments!("data", "sentiment_lexicon.csv"));

pub static COMPRESSED_SENTIMENT_LEXICON_FILE_NAME: &str = "sentiment_lexicon.csv.gz";
