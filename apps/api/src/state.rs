use std::sync::Arc;

use crate::llm_client::AnalysisProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Provider seam for the generative model. Production: `GeminiClient`
    /// built from config at startup; tests inject a scripted fake.
    pub analyzer: Arc<dyn AnalysisProvider>,
}
