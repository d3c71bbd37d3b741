use api::ApiError;
use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// In-page record of every backend call and its outcome.
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
    log.write().entries.push(LogEntry {
        timestamp,
        level,
        message: message.to_string(),
    });
}

/// Log the outcome of the request `label` (e.g. `"POST /goal"`).
pub fn log_response<T>(log: &mut Signal<ActivityLog>, label: &str, result: &Result<T, ApiError>) {
    match result {
        Ok(_) => log_activity(log, LogLevel::Success, &format!("{label} ok")),
        Err(ApiError::Status { status, .. }) if *status < 500 => {
            log_activity(log, LogLevel::Warning, &format!("{label}: {status}"))
        }
        Err(e) => log_activity(log, LogLevel::Error, &format!("{label}: {e}")),
    }
}
