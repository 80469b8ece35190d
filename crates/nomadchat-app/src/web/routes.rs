use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::web::AppState;
use nomadchat_types::{
    ChatReply, ChatRequest, HealthReport, StatsReport, CHAT_PATH, EMPTY_MESSAGE_REPLY,
    HEALTH_BANNER, HEALTH_PATH, SERVER_FAILURE_REPLY, STATS_PATH,
};

const FALLBACK_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head><title>Travel Assistant</title></head>
<body>
    <h1>🌍 Digital Nomad Travel Assistant</h1>
    <p>Static files not found. Please ensure the static folder is deployed.</p>
</body>
</html>
"#;

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // API routes
        .route(CHAT_PATH, post(chat))
        .route(HEALTH_PATH, get(health))
        .route(STATS_PATH, get(stats))
        // Widget page and its assets
        .route("/", get(serve_index))
        .nest_service("/static", static_files)
        .with_state(state)
}

/// POST /api/chat - Ask the travel assistant
async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Json<ChatReply> {
    let assistant = match state.assistant.get_or_init().await {
        Ok(assistant) => assistant,
        Err(e) => {
            log::error!("Travel assistant unavailable: {:#}", e);
            return Json(ChatReply::failed(SERVER_FAILURE_REPLY, e.to_string()));
        }
    };

    if request.message.trim().is_empty() {
        return Json(ChatReply::ok(EMPTY_MESSAGE_REPLY));
    }

    log::debug!(
        "Chat request for conversation {}",
        request.conversation_id.as_deref().unwrap_or("default")
    );

    match assistant.chat(&request.message).await {
        Ok(response) => Json(ChatReply::ok(response)),
        Err(e) => {
            log::error!("Chat request failed: {:#}", e);
            Json(ChatReply::failed(SERVER_FAILURE_REPLY, e.to_string()))
        }
    }
}

/// GET /api/health - Server liveness and assistant readiness
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let chatbot_ready = match state.assistant.get_or_init().await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Health check: assistant not ready: {}", e);
            false
        }
    };

    Json(HealthReport {
        status: Some("healthy".to_string()),
        chatbot_ready,
        message: Some(HEALTH_BANNER.to_string()),
        environment: Some(state.environment.clone()),
    })
}

/// GET /api/stats - Conversation counters
async fn stats(State(state): State<AppState>) -> Json<StatsReport> {
    let report = match state.assistant.get_or_init().await {
        Ok(assistant) => {
            let stats = assistant.stats().await;
            StatsReport::Available {
                total_conversations: stats.total_conversations,
                last_activity: stats.last_activity,
            }
        }
        Err(_) => StatsReport::Unavailable {
            error: "Chatbot not initialized".to_string(),
        },
    };

    Json(report)
}

/// GET / - Serve the widget page, or a placeholder when it is not deployed
async fn serve_index(State(state): State<AppState>) -> impl IntoResponse {
    let path = state.static_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => Html(content),
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            Html(FALLBACK_INDEX.to_string())
        }
    }
}
