use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Rejected by server: {0}")]
    Rejected(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No timetable selected")]
    NoCurrentTimetable,

    #[error("A timetable is already being generated")]
    GenerationInFlight,
}

impl AppError {
    /// Text the server supplied with a business failure, if any. Every other
    /// failure gets a generic notification instead.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Rejected(message) if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}
