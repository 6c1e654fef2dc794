//! HTTP request handlers

use super::types::{AiStatusResponse, ChatRequest, ChatResponse, ErrorResponse, HealthResponse};
use super::AppState;
use crate::assistant::ConversationTurn;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

const FEATURES: &[&str] = &[
    "smart_home_control",
    "architecture_design",
    "voice_recognition",
    "conversation_context",
];

/// Create the API router. Every path also answers with a trailing slash,
/// which is how the web frontend calls them.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(api_status))
        .route("/api/status/", get(api_status))
        .route("/api/ai/chat", post(ai_chat))
        .route("/api/ai/chat/", post(ai_chat))
        .route("/api/ai/status", get(ai_status))
        .route("/api/ai/status/", get(ai_status))
        .with_state(state)
}

async fn api_status() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
    })
}

// ============================================================
// Chat
// ============================================================

/// Dropping this future (client went away) drops the in-flight remote call
async fn ai_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::InvalidArgument(e.body_text()))?;

    let history: Vec<ConversationTurn> = req
        .history
        .unwrap_or_default()
        .into_iter()
        .map(Into::into)
        .collect();

    let reply = state
        .dispatcher
        .dispatch(&req.message, &history, &state.config)
        .await;

    #[allow(clippy::cast_precision_loss)] // Millisecond epoch fits an f64 exactly
    let timestamp = reply.timestamp.timestamp_millis() as f64 / 1000.0;

    Ok(Json(ChatResponse {
        success: true,
        response: reply.text,
        actions: reply.suggested_actions,
        timestamp,
        source: reply.source,
    }))
}

async fn ai_status(State(state): State<AppState>) -> Json<AiStatusResponse> {
    let available = state.config.api_key().is_some();

    Json(AiStatusResponse {
        success: true,
        openrouter_available: available,
        current_model: state.config.default_model.clone(),
        fallback_model: state.config.fallback_model.clone(),
        max_tokens: state.config.max_tokens,
        features: FEATURES.to_vec(),
        status: if available { "online" } else { "local_mode" },
    })
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    /// Malformed body or missing `message`; the only fault a caller sees
    InvalidArgument(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        tracing::warn!(status = %status, error = %message, "Rejected request");
        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
