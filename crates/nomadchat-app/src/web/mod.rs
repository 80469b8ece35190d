// HTTP API backing the browser widget
pub mod routes;
pub mod server;
pub mod state;

pub use routes::create_router;
pub use server::{WebServer, WebServerConfig};
pub use state::{AppState, AssistantSlot};
