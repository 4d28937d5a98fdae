use std::sync::Arc;

use relata_auth::directory::CredentialDirectory;
use relata_openai::client::OpenAiClient;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    /// Absent when OPENAI_API_KEY is not configured; generation fails with
    /// a user-visible error rather than at startup.
    pub generator: Option<OpenAiClient>,
    pub directory: Arc<CredentialDirectory>,
}
