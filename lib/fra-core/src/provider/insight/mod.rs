//! Free-text generation used for dashboard insights and document analysis.

use thiserror::Error;

pub mod gemini;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InsightRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub attachment: Option<InsightAttachment>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InsightAttachment {
    pub mime_type: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("HTTP error: `{0}`")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status `{status}`: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Empty response")]
    EmptyResponse,

    #[error("Encoding error: `{0}`")]
    Encoding(String),
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait InsightProvider: Send + Sync {
    async fn generate(&self, request: InsightRequest) -> Result<String, InsightError>;
}
