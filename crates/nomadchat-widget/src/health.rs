use nomadchat_types::{HealthReport, Status};

use crate::backend::TransportError;

/// Map the startup health probe to the header status
pub fn status_from_health(result: Result<HealthReport, TransportError>) -> Status {
    match result {
        Ok(report) if report.chatbot_ready => Status::online(),
        Ok(_) => Status::warming_up(),
        Err(e) => {
            log::error!("Health check failed: {}", e);
            Status::offline()
        }
    }
}
