use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Kept alongside the client so handlers can read runtime settings
    /// without re-reading the environment.
    #[allow(dead_code)]
    pub config: Config,
}
