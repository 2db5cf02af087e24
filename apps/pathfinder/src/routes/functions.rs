use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info};

use crate::models::profile::Profile;
use crate::state::AppState;

/// Error body of the insight function: `{ "message": ... }`, which is what
/// `HttpInsightSource` reads back as the warning text.
fn function_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "message": message.into() }))).into_response()
}

/// POST /.netlify/functions/generate-career-insights
///
/// Local implementation of the insight endpoint, backed by the LLM client.
pub async fn handle_generate_career_insights(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Response {
    let Some(generator) = state.generator.as_ref() else {
        return function_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Insight generation is not configured on this server",
        );
    };

    let profile = profile.normalized();
    match generator.generate(&profile).await {
        Ok(insight) => {
            info!("Insight function answered with {} career paths", insight.career_paths.len());
            Json(insight).into_response()
        }
        Err(e) => {
            error!("Insight function failed: {e}");
            function_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
