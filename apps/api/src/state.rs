use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini client, built once at startup. `None` when `GOOGLE_API_KEY` is
    /// absent; handlers that need it answer with a uniform 500 in that case.
    pub llm: Option<LlmClient>,
}
