use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Error;
use crate::Result;

/// Category label applied when no configured category claims a keyword.
pub const FALLBACK_CATEGORY: &str = "기타";

/// One topic bucket and the search keywords that belong to it.
/// Declaration order decides both classification priority and the section
/// order in the mail report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub keywords: Vec<String>,
}

impl Category {
    pub fn new(label: &str, keywords: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Immutable per-run configuration for the collection pipeline. Passed in at
/// call time so runs can override it without process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Search keywords in iteration order.
    pub keywords: Vec<String>,
    pub categories: Vec<Category>,
    /// Titles containing any of these substrings are dropped.
    pub denylist: Vec<String>,
    pub lookback_hours: i64,
    /// Freshness directive sent to the search backend, in days.
    pub lookback_days: u32,
    pub per_keyword_cap: usize,
    pub per_feed_scan_cap: usize,
    /// Titles with pairwise similarity strictly above this are duplicates.
    /// Empirically tuned, treat as configuration.
    pub duplicate_threshold: f64,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        let categories = vec![
            Category::new(
                "자재/시황",
                &["건설 원자재 가격", "철근 가격", "시멘트 가격", "레미콘 가격"],
            ),
            Category::new("물류/운송", &["건설 물류비", "화물연대 운송"]),
            Category::new(
                "정책/규제",
                &["건설 정책", "중대재해처벌법", "건설안전 규제"],
            ),
            Category::new(
                "환율/에너지",
                &["원달러 환율", "국제유가 전망", "산업용 전기요금"],
            ),
        ];
        let keywords = categories
            .iter()
            .flat_map(|c| c.keywords.iter().cloned())
            .collect();
        Self {
            keywords,
            categories,
            denylist: vec![
                "코스피", "코스닥", "특징주", "테마주", "급등주", "상한가", "목표주가",
                "애널리스트", "리포트", "단독 입수", "충격", "경악", "카지노", "토토",
                "비트코인", "가상화폐", "코인 시세", "19금",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            lookback_hours: 24,
            lookback_days: 1,
            per_keyword_cap: 10,
            per_feed_scan_cap: 25,
            duplicate_threshold: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub smtp_host: String,
    /// Sender mailbox, `Name <addr>` form accepted.
    pub from: String,
    pub recipients: Vec<String>,
    /// Recipients are blind-copied in batches of this size, one message each.
    pub batch_size: usize,
    pub subject_prefix: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".to_string(),
            from: "구매계약실 뉴스봇 <newsbot@example.com>".to_string(),
            recipients: Vec::new(),
            batch_size: 40,
            subject_prefix: "[Daily Market & Risk Briefing]".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    pub base_url: String,
    /// Upper bound on items the model is asked to pick for full cards.
    pub max_picks: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            max_picks: 6,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub collector: CollectorConfig,
    pub mail: MailConfig,
    pub model: ModelConfig,
}

impl AppConfig {
    /// Loads a JSON config file. Missing fields fall back to the defaults, so
    /// a file only needs to spell out what it changes.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("invalid config {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keywords_are_all_categorized() {
        let config = CollectorConfig::default();
        for keyword in &config.keywords {
            assert!(
                config
                    .categories
                    .iter()
                    .any(|c| c.keywords.contains(keyword)),
                "keyword {} has no category",
                keyword
            );
        }
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"collector": {"lookback_hours": 72}, "mail": {"recipients": ["a@b.kr"]}}"#,
        )
        .unwrap();
        assert_eq!(config.collector.lookback_hours, 72);
        assert_eq!(config.collector.per_keyword_cap, 10);
        assert_eq!(config.mail.recipients, vec!["a@b.kr".to_string()]);
        assert_eq!(config.mail.batch_size, 40);
        assert_eq!(config.model.name, "gemini-1.5-flash");
    }

    #[test]
    fn load_reports_missing_file() {
        let err = AppConfig::load(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
