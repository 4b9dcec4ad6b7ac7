pub mod count_hashtag_frequencies;
pub mod extract_hashtags;
pub mod parse_post_date;
pub mod rank_by_frequency;

pub use count_hashtag_frequencies::count_hashtag_frequencies;
pub use extract_hashtags::extract_hashtags;
pub use parse_post_date::parse_post_date;
pub use rank_by_frequency::rank_by_frequency;
