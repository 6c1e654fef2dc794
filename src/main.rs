//! SafeNest Assistant - smart home chat backend
//!
//! Serves the assistant chat endpoint: remote LLM completion with a
//! keyword-driven fallback and suggested device actions.

mod api;
mod assistant;
mod llm;

use api::{create_router, AppState};
use assistant::{AssistantConfig, ChatDispatcher};
use llm::{LoggingClient, OpenRouterClient};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safenest_assistant=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let port: u16 = std::env::var("SAFENEST_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let config = AssistantConfig::from_env();

    if let Some(key) = config.api_key() {
        tracing::info!(
            api_key = %llm::mask_key(key),
            model = %config.default_model,
            "OpenRouter API key loaded"
        );
    } else {
        tracing::warn!("OpenRouter API key not found. Set OPENROUTER_API_KEY; running in local mode.");
    }

    // Completion client
    let mut client = match std::env::var("OPENROUTER_BASE_URL") {
        Ok(base_url) => OpenRouterClient::with_base_url(&base_url)?,
        Err(_) => OpenRouterClient::new()?,
    };
    if let Ok(referer) = std::env::var("OPENROUTER_REFERER") {
        client = client.with_referer(referer);
    }
    tracing::info!(endpoint = %client.endpoint(), "Completion client ready");
    let client = Arc::new(LoggingClient::new(Arc::new(client)));

    let state = AppState::new(ChatDispatcher::new(client), config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("SafeNest assistant listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
