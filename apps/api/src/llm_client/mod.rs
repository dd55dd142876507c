//! LLM Client: the single point of entry for all generative-model calls.
//!
//! No other module may call the provider API directly; everything goes
//! through a [`ModelTransport`], which returns the raw response body.
//! Interpreting that body is the caller's job.
//!
//! One POST per prompt. There is no retry loop: a transport failure is
//! surfaced to the caller as-is.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

pub mod models;

use models::GenerateContentRequest;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors never carry the request URL, since it holds the API key.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Sends a prompt to the remote model and hands back the unparsed body.
///
/// Shared behind an `Arc<dyn ModelTransport>` so tests can substitute a stub.
#[async_trait]
pub trait ModelTransport: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// generateContent client. The API key is appended to the configured URL as
/// a query credential rather than sent as a header.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(LlmError::Http)?;

        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.api_url, self.api_key)
    }
}

#[async_trait]
impl ModelTransport for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(self.endpoint())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Http(e.without_url()))?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("LLM API returned {status}");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Http(e.without_url()))?;

        debug!(
            "LLM call succeeded: prompt_chars={}, body_bytes={}",
            prompt.chars().count(),
            body.len()
        );

        Ok(body)
    }
}
