//! Insight generation: the single asynchronous boundary of the wizard.
//!
//! `AppState` holds an `Arc<dyn InsightSource>`; the results view calls
//! [`load_insights`], which never fails: on any error it substitutes the
//! fallback insight and reports the error text as a warning.

pub mod client;
pub mod fallback;
pub mod prompts;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::insights::fallback::fallback_insight;
use crate::insights::prompts::{build_career_prompt, career_system_prompt};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::insight::Insight;
use crate::models::profile::Profile;

#[derive(Debug, Error)]
pub enum InsightError {
    /// The wrapped error carries no URL, so the warning banner never shows
    /// the endpoint address.
    #[error("Could not reach the insight service: {0}")]
    Http(#[source] reqwest::Error),

    /// Non-2xx answer; `message` is the endpoint's own error text.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("The insight service returned an unexpected response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Insight generation failed: {0}")]
    Llm(#[from] LlmError),
}

impl From<reqwest::Error> for InsightError {
    fn from(e: reqwest::Error) -> Self {
        InsightError::Http(e.without_url())
    }
}

/// Produces career insights for a profile. Implement this to swap backends
/// without touching the handlers.
#[async_trait]
pub trait InsightSource: Send + Sync {
    async fn generate(&self, profile: &Profile) -> Result<Insight, InsightError>;
}

/// What the results view renders: always an insight, plus the warning text
/// when it is the fallback.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InsightOutcome {
    pub insight: Insight,
    pub warning: Option<String>,
}

/// Runs the one outbound insight request for `profile`. No retry; failure
/// swaps in the fallback in the same step.
pub async fn load_insights(source: &dyn InsightSource, profile: &Profile) -> InsightOutcome {
    info!(
        "Generating insights: degree={:?} modules={} interests={}",
        profile.degree,
        profile.modules.len(),
        profile.interests.len()
    );

    match source.generate(profile).await {
        Ok(insight) => {
            info!("Insights generated: {} career paths", insight.career_paths.len());
            InsightOutcome {
                insight,
                warning: None,
            }
        }
        Err(e) => {
            warn!("Insight generation failed, using fallback: {e}");
            InsightOutcome {
                insight: fallback_insight(profile),
                warning: Some(e.to_string()),
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmInsightSource: backs the local insight function
// ────────────────────────────────────────────────────────────────────────────

/// Generates insights by prompting Claude directly.
pub struct LlmInsightSource(pub LlmClient);

#[async_trait]
impl InsightSource for LlmInsightSource {
    async fn generate(&self, profile: &Profile) -> Result<Insight, InsightError> {
        let prompt = build_career_prompt(profile)?;
        let insight = self
            .0
            .call_json::<Insight>(&prompt, &career_system_prompt())
            .await?;
        Ok(insight)
    }
}
