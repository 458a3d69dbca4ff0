use chrono::{DateTime, Utc};
use nb_core::config::CollectorConfig;
use nb_core::{CollectOutcome, NewsItem};
use tracing::{debug, info, warn};

use crate::category::classify;
use crate::dedup::is_duplicate;
use crate::feed::{build_query, FeedSource};
use crate::noise::is_noise;
use crate::recency::is_recent;

/// Runs one collection pass over every configured keyword, in order.
///
/// Per keyword: fetch the feed, scan at most `per_feed_scan_cap` entries in
/// feed order, and accept until `per_keyword_cap` is reached. Each candidate
/// passes the recency filter, the noise filter, run-wide link dedup, and
/// run-wide title dedup before it is assigned a category and the next
/// sequential id.
///
/// A retrieval or parse failure for one keyword is recorded in the outcome
/// and contributes zero items; it never aborts the run. Each keyword is
/// attempted exactly once, no retries.
pub async fn collect(
    source: &dyn FeedSource,
    config: &CollectorConfig,
    now: DateTime<Utc>,
) -> CollectOutcome {
    let mut outcome = CollectOutcome::default();

    for keyword in &config.keywords {
        let query = build_query(keyword, config.lookback_days);
        let entries = match source.search(&query).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("⚠️ Keyword '{}' failed: {}", keyword, e);
                outcome.failed_keywords.push(keyword.clone());
                continue;
            }
        };

        let mut accepted = 0;
        for entry in entries.into_iter().take(config.per_feed_scan_cap) {
            if accepted >= config.per_keyword_cap {
                break;
            }
            if !is_recent(&entry.published, config.lookback_hours, now) {
                debug!("Stale or undated, skipping: {}", entry.title);
                continue;
            }
            if is_noise(&entry.title, &config.denylist) {
                debug!("Denylisted, skipping: {}", entry.title);
                continue;
            }
            if outcome.items.iter().any(|item| item.link == entry.link) {
                debug!("Link already accepted, skipping: {}", entry.link);
                continue;
            }
            let titles: Vec<&str> = outcome.items.iter().map(|i| i.title.as_str()).collect();
            if is_duplicate(&entry.title, &titles, config.duplicate_threshold) {
                debug!("Near-duplicate title, skipping: {}", entry.title);
                continue;
            }

            outcome.items.push(NewsItem {
                id: outcome.items.len(),
                title: entry.title,
                link: entry.link,
                keyword: keyword.clone(),
                category: classify(keyword, &config.categories).to_string(),
                snippet: entry.snippet,
                published: entry.published,
            });
            accepted += 1;
        }
        info!("🔎 '{}' accepted {} item(s)", keyword, accepted);
    }

    info!(
        "📰 Collected {} item(s) from {} keyword(s) ({} failed)",
        outcome.items.len(),
        config.keywords.len(),
        outcome.failed_keywords.len()
    );
    outcome
}
