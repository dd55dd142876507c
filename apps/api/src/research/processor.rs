//! Prompt Processor: turns a research request into a model prompt, and the
//! model's reply into an answer string.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::llm_client::models::GenerateContentResponse;
use crate::llm_client::ModelTransport;
use crate::research::registry::TemplateRegistry;

pub const NO_CONTENT_FALLBACK: &str = "No content found in response";
pub const PARSE_ERROR_PREFIX: &str = "Error Parsing: ";

/// Inbound request: which operation to apply, and the text to apply it to.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRequest {
    pub operation: String,
    pub content: String,
}

#[derive(Clone)]
pub struct PromptProcessor {
    registry: &'static TemplateRegistry,
    transport: Arc<dyn ModelTransport>,
}

impl PromptProcessor {
    pub fn new(registry: &'static TemplateRegistry, transport: Arc<dyn ModelTransport>) -> Self {
        Self {
            registry,
            transport,
        }
    }

    pub fn registry(&self) -> &'static TemplateRegistry {
        self.registry
    }

    /// Instruction prefix followed by the content exactly as submitted.
    pub fn build_prompt(&self, request: &ProcessRequest) -> Result<String, AppError> {
        let instruction = self.registry.lookup(&request.operation)?;
        Ok(format!("{instruction}{}", request.content))
    }

    /// Full pipeline. Unknown operations fail before the model is called;
    /// transport failures propagate; an unusable response body becomes a
    /// fallback answer string.
    pub async fn process(&self, request: &ProcessRequest) -> Result<String, AppError> {
        let prompt = self.build_prompt(request)?;

        debug!(
            operation = %request.operation,
            prompt_chars = prompt.chars().count(),
            "Sending prompt to model"
        );

        let body = self
            .transport
            .generate(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("{} failed: {e}", request.operation)))?;

        Ok(extract_text(&body))
    }
}

/// Pulls the first answer out of a raw response body. Never fails.
pub fn extract_text(body: &str) -> String {
    match serde_json::from_str::<GenerateContentResponse>(body) {
        Ok(response) => match response.first_text() {
            Some(text) => text.to_string(),
            None => {
                warn!("Model response contained no text part");
                NO_CONTENT_FALLBACK.to_string()
            }
        },
        Err(e) => {
            warn!("Model response was not valid JSON: {e}");
            format!("{PARSE_ERROR_PREFIX}{e}")
        }
    }
}
