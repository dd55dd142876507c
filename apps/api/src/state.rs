use crate::research::processor::PromptProcessor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub processor: PromptProcessor,
}
