#![allow(unused)] // Each test file uses a subset of the fixtures

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! path_from_segments {
    ($($segment:expr),+ $(,)?) => {
        [$($segment),+].into_iter().collect::<PathBuf>()
    };
}

// Fixture paths, relative to the crate root
pub static SAMPLE_POSTS_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| path_from_segments!("tests", "test_files", "sample_posts.csv"));

pub static NO_HASHTAGS_COLUMN_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| path_from_segments!("tests", "test_files", "no_hashtags_column.csv"));
