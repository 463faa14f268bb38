use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Generation backend. `LlmClient` in production, stubs in tests.
    pub generator: Arc<dyn TextGenerator>,
}
