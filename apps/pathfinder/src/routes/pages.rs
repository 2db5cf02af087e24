//! Handlers for the three wizard views.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Form, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};
use futures::{future, stream, StreamExt};

use crate::errors::AppError;
use crate::insights::{load_insights, InsightSource};
use crate::intake::{IntakeForm, IntakeSubmission};
use crate::models::profile::Profile;
use crate::navigation::{enter_results, NavigationState, ResultsEntry};
use crate::state::AppState;
use crate::views::{form::render_form, landing::render_landing, results};

/// GET /
pub async fn handle_landing() -> Html<String> {
    Html(render_landing())
}

/// GET /form
pub async fn handle_form() -> Html<String> {
    Html(render_form(&IntakeForm::new()))
}

/// POST /form
///
/// Applies one intake action to the posted state and re-renders the form.
/// A complete submit that lands here instead of `/results` is handed off
/// the same way.
pub async fn handle_form_action(
    State(state): State<AppState>,
    Form(submission): Form<IntakeSubmission>,
) -> Result<Response, AppError> {
    let mut form = IntakeForm::from_submission(&submission)?;

    match form.apply(&submission.action()) {
        Some(navigation) => Ok(results_response(state.insights.clone(), Some(navigation))),
        None => Ok(Html(render_form(&form)).into_response()),
    }
}

/// GET /results
///
/// A plain GET never carries a handed-off profile.
pub async fn handle_results_direct(State(state): State<AppState>) -> Response {
    results_response(state.insights.clone(), None)
}

/// POST /results
///
/// The intake submit button posts here. An incomplete form is shown again
/// unchanged; no body at all is treated as a missing handoff.
pub async fn handle_results_submit(
    State(state): State<AppState>,
    submission: Option<Form<IntakeSubmission>>,
) -> Result<Response, AppError> {
    let Some(Form(submission)) = submission else {
        return Ok(results_response(state.insights.clone(), None));
    };

    let form = IntakeForm::from_submission(&submission)?;
    match form.submit() {
        Some(navigation) => Ok(results_response(state.insights.clone(), Some(navigation))),
        None => Ok(Html(render_form(&form)).into_response()),
    }
}

fn results_response(
    insights: Arc<dyn InsightSource>,
    navigation: Option<NavigationState>,
) -> Response {
    match enter_results(navigation) {
        ResultsEntry::Redirect(route) => Redirect::to(route.path()).into_response(),
        ResultsEntry::Render(profile) => stream_results(insights, profile),
    }
}

/// Streams the results page in two chunks: the loading indicator goes out
/// at once, the insight (or fallback) follows when the request settles.
/// If the client goes away first, the body stream is dropped together with
/// the in-flight request and nothing is rendered.
fn stream_results(insights: Arc<dyn InsightSource>, profile: Profile) -> Response {
    let loading = results::render_loading(&profile);

    let settled = async move {
        let outcome = load_insights(insights.as_ref(), &profile).await;
        Ok::<_, Infallible>(results::render_outcome(&outcome))
    };

    let chunks = stream::once(future::ready(Ok::<_, Infallible>(loading)))
        .chain(stream::once(settled));

    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Body::from_stream(chunks),
    )
        .into_response()
}
