use serde::{Deserialize, Serialize};

/// One candidate article surfaced by a keyword search and accepted by the
/// collection pipeline. Never mutated after acceptance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    /// Dense, zero-based sequence position in discovery order. Downstream
    /// model annotations join back onto this id.
    pub id: usize,
    /// Headline exactly as the feed returned it.
    pub title: String,
    pub link: String,
    /// The search term that surfaced this item.
    pub keyword: String,
    /// A configured category label, or the catch-all.
    pub category: String,
    /// Plain-text excerpt extracted from the feed description, when present.
    pub snippet: Option<String>,
    pub published: RawTimestamp,
}

/// Publication timestamp as supplied by the feed, before normalization.
/// Feeds disagree on shape, so both are carried explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawTimestamp {
    /// Calendar fields already in UTC.
    Parts {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    },
    /// Free-text date string; naive strings are assumed UTC.
    Text(String),
    /// The entry carried no date at all.
    Missing,
}

/// A raw feed entry before any filtering.
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    pub snippet: Option<String>,
    pub published: RawTimestamp,
}

/// Risk level the briefing model assigns to a picked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Critical,
    Warning,
    Info,
}

/// One model-selected item with its annotations, joined back by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pick {
    pub id: usize,
    pub summary: String,
    pub insight: String,
    pub risk: Risk,
}

/// Structured output of the briefing model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Briefing {
    /// One-paragraph market mood line shown at the top of the report.
    #[serde(default)]
    pub weather: String,
    #[serde(default)]
    pub picks: Vec<Pick>,
}

/// Result of one collection run. Empty `items` is a valid outcome and means
/// the downstream briefing and mail steps must be skipped.
#[derive(Debug, Default)]
pub struct CollectOutcome {
    pub items: Vec<NewsItem>,
    /// Keywords whose retrieval or parse failed; they contributed zero items.
    pub failed_keywords: Vec<String>,
}
