use std::sync::Arc;

use crate::insights::InsightSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Where the wizard gets its insights. Default: `HttpInsightSource`
    /// pointed at `INSIGHTS_BASE_URL`.
    pub insights: Arc<dyn InsightSource>,
    /// Backend of the local insight function; `None` when no
    /// `ANTHROPIC_API_KEY` is configured.
    pub generator: Option<Arc<dyn InsightSource>>,
}
