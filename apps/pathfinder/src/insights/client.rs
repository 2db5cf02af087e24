use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::insights::{InsightError, InsightSource};
use crate::models::insight::Insight;
use crate::models::profile::Profile;

/// Path of the insight function on the hosting origin.
pub const GENERATE_INSIGHTS_PATH: &str = "/.netlify/functions/generate-career-insights";

/// Used when a failed response carries no `message` of its own.
const DEFAULT_ERROR_MESSAGE: &str = "Failed to generate career insights";

#[derive(Debug, Deserialize)]
struct EndpointError {
    message: Option<String>,
}

/// Calls the remote insight function over HTTP: profile JSON in, insight
/// JSON out. One attempt per call, bounded by the client timeout.
#[derive(Clone)]
pub struct HttpInsightSource {
    client: Client,
    endpoint: String,
}

impl HttpInsightSource {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), GENERATE_INSIGHTS_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InsightSource for HttpInsightSource {
    async fn generate(&self, profile: &Profile) -> Result<Insight, InsightError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(profile)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<EndpointError>(&body)
                .ok()
                .and_then(|e| e.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
            return Err(InsightError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(InsightError::Parse)
    }
}
