use ct_codecs::{Base64, Encoder};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use super::{InsightError, InsightProvider, InsightRequest};
use crate::config::core_config::InsightConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Generative Language `generateContent` client
pub struct GeminiInsightProvider {
    client: reqwest::Client,
    api_key: SecretString,
    endpoint: Url,
}

impl GeminiInsightProvider {
    /// Returns `None` when no API key is configured
    pub fn from_config(config: &InsightConfig) -> Result<Option<Self>, InsightError> {
        let Some(api_key) = config.api_key.to_owned() else {
            return Ok(None);
        };

        let endpoint = config
            .base_url
            .join(&format!("v1beta/models/{}:generateContent", config.model))
            .map_err(|e| InsightError::Encoding(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout.unsigned_abs())
            .build()?;

        Ok(Some(Self {
            client,
            api_key,
            endpoint,
        }))
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize, Deserialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl Part {
    fn text(text: String) -> Self {
        Self {
            text: Some(text),
            inline_data: None,
        }
    }
}

#[async_trait::async_trait]
impl InsightProvider for GeminiInsightProvider {
    async fn generate(&self, request: InsightRequest) -> Result<String, InsightError> {
        let mut parts = vec![Part::text(request.prompt)];
        if let Some(attachment) = request.attachment {
            let data = Base64::encode_to_string(&attachment.content)
                .map_err(|e| InsightError::Encoding(e.to_string()))?;
            parts.push(Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: attachment.mime_type,
                    data,
                }),
            });
        }

        let body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part::text(request.system_instruction)],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let response: GenerateContentResponse = response.json().await?;

        let text = response
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(InsightError::EmptyResponse);
        }

        Ok(text)
    }
}
