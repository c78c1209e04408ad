use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::de::{opt_text, text};
use crate::models::{SessionEntry, ValidationResult};

/// The `{success, data?, message?}` wrapper every JSON endpoint answers with.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// The payload of a successful, well-formed response.
    pub fn into_result(self) -> Result<T, AppError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(AppError::Decode("response has no data".to_string())),
            (false, _) => Err(AppError::Rejected(self.message.unwrap_or_default())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    pub fn into_result(self) -> Result<(), AppError> {
        if self.success {
            Ok(())
        } else {
            Err(AppError::Rejected(self.message.unwrap_or_default()))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ValidateDataResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub program: String,
    pub semester: String,
    pub algorithm: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerationMetadata {
    #[serde(default, deserialize_with = "text")]
    pub program: String,
    #[serde(default, deserialize_with = "text")]
    pub semester: String,
    #[serde(default)]
    pub total_sessions: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "opt_text")]
    pub timetable_id: Option<String>,
    #[serde(default)]
    pub metadata: GenerationMetadata,
    #[serde(default)]
    pub validation: ValidationResult,
    #[serde(default)]
    pub timetable: Vec<SessionEntry>,
    #[serde(default)]
    pub message: Option<String>,
}

impl GenerateResponse {
    pub fn session_count(&self) -> usize {
        self.metadata
            .total_sessions
            .unwrap_or(self.timetable.len())
    }
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}
