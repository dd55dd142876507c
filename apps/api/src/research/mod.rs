// Research assistant: operation templates, prompt processing, HTTP handlers.
// All model calls go through llm_client.

pub mod handlers;
pub mod processor;
pub mod prompts;
pub mod registry;
