use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::insights::{load_insights, InsightOutcome};
use crate::intake::completeness::check_completeness;
use crate::models::profile::Profile;
use crate::state::AppState;

/// POST /api/v1/insights
///
/// JSON counterpart of the results view for non-browser clients. Lists are
/// cleaned up the way the intake form cleans them before the completeness
/// check; same fallback policy.
pub async fn handle_insights(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<InsightOutcome>, AppError> {
    let profile = profile.normalized();
    let report = check_completeness(&profile);
    if !report.is_complete() {
        return Err(AppError::Validation(format!(
            "Profile is incomplete, missing: {}",
            report.describe()
        )));
    }

    let outcome = load_insights(state.insights.as_ref(), &profile).await;
    Ok(Json(outcome))
}
