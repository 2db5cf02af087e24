pub mod api;
pub mod functions;
pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::insights::client::GENERATE_INSIGHTS_PATH;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Wizard views
        .route("/", get(pages::handle_landing))
        .route(
            "/form",
            get(pages::handle_form).post(pages::handle_form_action),
        )
        .route(
            "/results",
            get(pages::handle_results_direct).post(pages::handle_results_submit),
        )
        // JSON API
        .route("/api/v1/insights", post(api::handle_insights))
        // Local insight function
        .route(
            GENERATE_INSIGHTS_PATH,
            post(functions::handle_generate_career_insights),
        )
        .with_state(state)
}
