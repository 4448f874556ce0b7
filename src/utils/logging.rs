use tracing::{debug, error, info};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_START: {} in chat {} - {}", command, chat_id, d),
        None => info!("CMD_START: {} in chat {}", command, chat_id),
    }
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, chat_id: i64, error: &str) {
    error!("CMD_ERROR: {} in chat {} - {}", command, chat_id, error);
}

/// Logs outbound calls to external services with consistent format
pub fn log_api_call(service: &str, details: &str) {
    debug!("API_CALL: {} - {}", service, details);
}

/// Logs alert-scheduler activity with consistent format
pub fn log_scheduler_event(event: &str, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!("SCHED: {} for chat {} - {}", event, chat_id, d),
        None => info!("SCHED: {} for chat {}", event, chat_id),
    }
}
