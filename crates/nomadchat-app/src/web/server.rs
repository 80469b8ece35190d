use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

use crate::web::{routes, AppState, AssistantSlot};

/// Web server configuration
pub struct WebServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub environment: String,
}

/// Web server instance
pub struct WebServer {
    config: WebServerConfig,
    state: AppState,
}

impl WebServer {
    pub fn new(config: WebServerConfig, assistant: AssistantSlot) -> Self {
        let state = AppState::new(assistant, config.static_dir.clone(), config.environment.clone());
        Self { config, state }
    }

    /// Start the web server
    pub async fn start(self) -> Result<()> {
        if !self.config.static_dir.exists() {
            log::warn!(
                "Static directory {} does not exist, serving the fallback page",
                self.config.static_dir.display()
            );
        }

        // The widget may be hosted on another origin
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = routes::create_router(self.state).layer(cors);

        println!("🌐 Web server starting on http://{}", self.config.bind_addr);
        println!("   API endpoints: http://{}/api/chat", self.config.bind_addr);

        let listener = tokio::net::TcpListener::bind(&self.config.bind_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
