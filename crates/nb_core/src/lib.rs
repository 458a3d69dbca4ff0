pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, Category, CollectorConfig, MailConfig, ModelConfig, FALLBACK_CATEGORY};
pub use error::Error;
pub use types::{Briefing, CollectOutcome, NewsItem, Pick, RawEntry, RawTimestamp, Risk};

pub type Result<T> = std::result::Result<T, Error>;
