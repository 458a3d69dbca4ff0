use std::fmt;

use async_trait::async_trait;
use nb_core::config::ModelConfig;
use nb_core::{Briefing, Error, NewsItem, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{item_lines, parse_briefing, BriefingModel};

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<Part>,
}

pub struct GeminiModel {
    client: Client,
    config: ModelConfig,
    api_key: String,
}

impl GeminiModel {
    pub fn new(config: ModelConfig, api_key: String) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::Inference("Gemini API key is required".to_string()));
        }
        Ok(Self {
            client: Client::new(),
            config,
            api_key,
        })
    }

    fn prompt(&self, items: &[NewsItem]) -> String {
        format!(
            "당신은 건설사 구매계약실을 위한 뉴스 브리핑 어시스턴트입니다.\n\
             아래는 오늘 수집된 뉴스 목록입니다 (형식: id | 카테고리 | 제목):\n\n{}\n\
             이 중 구매/조달 리스크 관점에서 중요한 기사를 최대 {}건 고르고,\n\
             전체 시장 분위기를 한 문단으로 요약하십시오.\n\
             반드시 아래 형식의 JSON 객체 하나만 출력하십시오. 다른 텍스트는 금지합니다.\n\
             {{\"weather\": \"시장 분위기 요약\", \"picks\": [{{\"id\": 0, \"summary\": \"두세 문장 요약\", \
             \"insight\": \"구매 담당자를 위한 시사점 한 문장\", \"risk\": \"critical|warning|info\"}}]}}\n\
             id는 반드시 목록에 있는 값만 사용하십시오.",
            item_lines(items),
            self.config.max_picks
        )
    }
}

impl fmt::Debug for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiModel")
            .field("model", &self.config.name)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl BriefingModel for GeminiModel {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn brief(&self, items: &[NewsItem]) -> Result<Briefing> {
        if items.is_empty() {
            return Err(Error::Inference("no items to brief".to_string()));
        }

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: self.prompt(items),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.4,
                response_mime_type: "application/json".to_string(),
            },
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.name, self.api_key
        );
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Inference(format!("Gemini request failed: {}", e)))?
            .json::<GenerateResponse>()
            .await?;

        let text = response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| Error::Inference("Gemini returned no candidates".to_string()))?;
        debug!("Gemini raw response: {}", text);

        parse_briefing(text, items)
    }
}
