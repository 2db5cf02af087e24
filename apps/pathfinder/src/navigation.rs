//! Wizard routes and the handoff between the intake and results views.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::profile::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Form,
    Results,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Form => "/form",
            Route::Results => "/results",
        }
    }
}

/// In-memory payload passed from the intake view to the results view.
/// Never encoded into the URL and never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub form_data: Option<Profile>,
}

impl NavigationState {
    pub fn handoff(profile: Profile) -> Self {
        Self {
            form_data: Some(profile),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsEntry {
    Render(Profile),
    Redirect(Route),
}

/// Guard for the results view: without a handed-off profile (direct load,
/// refresh, back button) the visitor is sent back to the intake form.
pub fn enter_results(state: Option<NavigationState>) -> ResultsEntry {
    match state.and_then(|s| s.form_data) {
        Some(profile) => ResultsEntry::Render(profile),
        None => {
            debug!("Results reached without a profile, redirecting to intake");
            ResultsEntry::Redirect(Route::Form)
        }
    }
}
