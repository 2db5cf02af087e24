mod config;
mod errors;
mod insights;
mod intake;
mod llm_client;
mod models;
mod navigation;
mod routes;
mod state;
mod views;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::insights::client::HttpInsightSource;
use crate::insights::{InsightSource, LlmInsightSource};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PathFinder v{}", env!("CARGO_PKG_VERSION"));

    // Insight source used by the results view
    let insights = HttpInsightSource::new(&config.insights_base_url, config.insights_timeout);
    info!(
        "Insight endpoint: {} (timeout {}s)",
        insights.endpoint(),
        config.insights_timeout.as_secs()
    );

    // Local insight function, only when an API key is present
    let generator: Option<Arc<dyn InsightSource>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone());
            info!("Local insight function enabled (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmInsightSource(llm)))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; local insight function will answer 503");
            None
        }
    };

    let state = AppState {
        insights: Arc::new(insights),
        generator,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
