use std::time::Duration;

use async_trait::async_trait;
use nb_core::{Error, RawEntry, RawTimestamp, Result};
use reqwest::Client;
use scraper::Html;
use tracing::debug;
use url::Url;

/// Fixed negative terms appended to every query so stock-market coverage is
/// cut at the source rather than only by the noise filter.
const NEGATIVE_TERMS: &[&str] = &["-주가", "-증시", "-코스피", "-특징주", "-목표주가"];

/// Builds the search query for one keyword: the keyword itself, the negative
/// terms, and a freshness directive bounded by the lookback window.
pub fn build_query(keyword: &str, lookback_days: u32) -> String {
    let mut query = String::from(keyword);
    for term in NEGATIVE_TERMS {
        query.push(' ');
        query.push_str(term);
    }
    query.push_str(&format!(" when:{}d", lookback_days));
    query
}

/// The external news-search collaborator. The collector only needs raw
/// entries in feed order; everything past that is this crate's job.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<RawEntry>>;
}

/// Google News RSS search, Korean edition.
pub struct GoogleNewsSource {
    client: Client,
    base_url: String,
}

impl GoogleNewsSource {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent("Mozilla/5.0 (compatible; nb-briefing/0.1)")
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: "https://news.google.com/rss/search".to_string(),
        }
    }
}

impl Default for GoogleNewsSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedSource for GoogleNewsSource {
    async fn search(&self, query: &str) -> Result<Vec<RawEntry>> {
        let url = format!(
            "{}?q={}&hl=ko&gl=KR&ceid=KR:ko",
            self.base_url,
            urlencoding::encode(query)
        );
        debug!("Fetching feed: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Feed(format!(
                "feed returned status {}",
                response.status()
            )));
        }
        let content = response.bytes().await?;
        let channel = rss::Channel::read_from(&content[..])
            .map_err(|e| Error::Feed(format!("failed to parse feed: {}", e)))?;

        Ok(channel.items().iter().filter_map(entry_from_item).collect())
    }
}

/// Converts one RSS item into a raw entry. Items without a usable title or
/// link are dropped here so the filters only ever see complete entries.
fn entry_from_item(item: &rss::Item) -> Option<RawEntry> {
    let title = item.title()?.trim().to_string();
    let link = item.link()?.trim().to_string();
    if title.is_empty() || Url::parse(&link).is_err() {
        return None;
    }
    let published = match item.pub_date() {
        Some(date) => RawTimestamp::Text(date.to_string()),
        None => RawTimestamp::Missing,
    };
    Some(RawEntry {
        title,
        link,
        snippet: item
            .description()
            .map(strip_html)
            .filter(|s| !s.is_empty()),
        published,
    })
}

/// Google News descriptions arrive as HTML fragments; keep only the text.
fn strip_html(fragment: &str) -> String {
    let document = Html::parse_fragment(fragment);
    document
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_carries_keyword_negatives_and_freshness() {
        let query = build_query("건설 원자재 가격", 3);
        assert!(query.starts_with("건설 원자재 가격"));
        assert!(query.contains("-코스피"));
        assert!(query.contains("-주가"));
        assert!(query.ends_with("when:3d"));
    }

    #[test]
    fn entry_conversion_keeps_complete_items() {
        let item = rss::ItemBuilder::default()
            .title(Some("시멘트 가격 인상 통보".to_string()))
            .link(Some("https://news.example.kr/a/1".to_string()))
            .pub_date(Some("Thu, 08 Jan 2026 08:30:00 GMT".to_string()))
            .description(Some("<a href=\"#\">시멘트 업계</a> 가격 인상".to_string()))
            .build();

        let entry = entry_from_item(&item).unwrap();
        assert_eq!(entry.title, "시멘트 가격 인상 통보");
        assert_eq!(entry.link, "https://news.example.kr/a/1");
        assert_eq!(
            entry.published,
            RawTimestamp::Text("Thu, 08 Jan 2026 08:30:00 GMT".to_string())
        );
        assert_eq!(entry.snippet.as_deref(), Some("시멘트 업계 가격 인상"));
    }

    #[test]
    fn entry_conversion_drops_incomplete_items() {
        let no_link = rss::ItemBuilder::default()
            .title(Some("제목만 있음".to_string()))
            .build();
        assert!(entry_from_item(&no_link).is_none());

        let bad_link = rss::ItemBuilder::default()
            .title(Some("제목".to_string()))
            .link(Some("not a url".to_string()))
            .build();
        assert!(entry_from_item(&bad_link).is_none());
    }

    #[test]
    fn missing_date_becomes_missing_timestamp() {
        let item = rss::ItemBuilder::default()
            .title(Some("제목".to_string()))
            .link(Some("https://news.example.kr/a/2".to_string()))
            .build();
        let entry = entry_from_item(&item).unwrap();
        assert_eq!(entry.published, RawTimestamp::Missing);
        assert!(entry.snippet.is_none());
    }
}
