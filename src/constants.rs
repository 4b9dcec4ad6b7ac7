/// Compound scores at or above this value are labeled `Positive`.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores at or below this value are labeled `Negative`.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

pub const TEXT_COLUMN: &str = "Text";
pub const DATE_COLUMN: &str = "Date";
pub const HASHTAGS_COLUMN: &str = "Hashtags";

pub const NO_RECORDS_MESSAGE: &str = "No posts found in the dataset.";
pub const NO_HASHTAGS_MESSAGE: &str = "No hashtags found in the dataset.";
pub const NO_HASHTAG_TRENDS_MESSAGE: &str = "No hashtags found for trend analysis.";

/// Gzipped `Token,Valence` CSV produced by the build script.
pub const COMPRESSED_SENTIMENT_LEXICON_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/sentiment_lexicon.csv.gz"));

pub const NEGATION_WORDS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "never", "no", "nobody", "none",
    "nope", "nor", "not", "nothing", "nowhere", "shouldnt", "wasnt", "werent", "without", "wont",
    "wouldnt",
];

pub const BOOSTER_WORDS: &[&str] = &[
    "absolutely", "completely", "deeply", "enormously", "entirely", "especially", "exceptionally",
    "extremely", "fully", "greatly", "highly", "hugely", "incredibly", "intensely", "majorly",
    "particularly", "purely", "quite", "really", "so", "substantially", "thoroughly", "totally",
    "tremendously", "truly", "unbelievably", "utterly", "very",
];

pub const DAMPENER_WORDS: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "kindof", "less", "little", "marginally",
    "occasionally", "partly", "scarcely", "slightly", "somewhat", "sorta",
];
