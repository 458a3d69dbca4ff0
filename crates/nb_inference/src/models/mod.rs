use async_trait::async_trait;
use nb_core::{Briefing, NewsItem, Result};

pub mod dummy;
pub mod gemini;

pub use dummy::DummyModel;
pub use gemini::GeminiModel;

#[async_trait]
pub trait BriefingModel: Send + Sync {
    /// Model identifier used in logs.
    fn name(&self) -> &str;

    /// Produces a structured briefing for the collected items.
    async fn brief(&self, items: &[NewsItem]) -> Result<Briefing>;
}

/// Renders the item list the way the prompt expects it: one
/// `id | category | title` line per item, snippet appended when present.
pub fn item_lines(items: &[NewsItem]) -> String {
    let mut lines = String::new();
    for item in items {
        lines.push_str(&format!("{} | {} | {}", item.id, item.category, item.title));
        if let Some(snippet) = &item.snippet {
            lines.push_str(&format!(" :: {}", snippet));
        }
        lines.push('\n');
    }
    lines
}

/// Strips the Markdown code fence models like to wrap JSON answers in.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Parses model output into a briefing, dropping picks that reference ids the
/// collector never assigned. The surviving picks join back onto items by id.
pub fn parse_briefing(text: &str, items: &[NewsItem]) -> Result<Briefing> {
    let mut briefing: Briefing = serde_json::from_str(strip_code_fence(text))?;
    briefing.picks.retain(|pick| {
        let known = items.iter().any(|item| item.id == pick.id);
        if !known {
            tracing::warn!("Dropping pick with unknown id {}", pick.id);
        }
        known
    });
    Ok(briefing)
}
