pub mod category;
pub mod collector;
pub mod dedup;
pub mod feed;
pub mod noise;
pub mod recency;

pub use collector::collect;
pub use feed::{FeedSource, GoogleNewsSource};
