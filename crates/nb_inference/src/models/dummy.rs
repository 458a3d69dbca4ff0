use async_trait::async_trait;
use nb_core::{Briefing, Error, NewsItem, Pick, Result, Risk};

use super::BriefingModel;

/// Canned model for tests and offline dry runs: picks the first item as an
/// informational card and emits a fixed weather line.
#[derive(Debug, Default)]
pub struct DummyModel;

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BriefingModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn brief(&self, items: &[NewsItem]) -> Result<Briefing> {
        let first = items
            .first()
            .ok_or_else(|| Error::Inference("no items to brief".to_string()))?;
        Ok(Briefing {
            weather: "전반적인 시장 분위기는 '보통'입니다.".to_string(),
            picks: vec![Pick {
                id: first.id,
                summary: format!("{} 관련 보도가 이어지고 있습니다.", first.keyword),
                insight: "원문 기사를 직접 확인해 주십시오.".to_string(),
                risk: Risk::Info,
            }],
        })
    }
}
