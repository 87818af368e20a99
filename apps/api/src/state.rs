use std::sync::Arc;

use crate::extractor::JobDescriptionExtractor;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Production wiring installs the OpenAI
    /// client; tests swap in deterministic fakes.
    pub llm: Arc<dyn CompletionBackend>,
    pub extractor: JobDescriptionExtractor,
}
