#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use timetable_console::Console;
use timetable_console::api::{
    Ack, Envelope, ExportFormat, GenerateRequest, GenerateResponse, HealthResponse,
    TimetableApi, ValidateDataResponse,
};
use timetable_console::error::AppError;
use timetable_console::models::{EntityKind, FormFields, Timetable};
use timetable_console::ui::MemorySurface;

/// In-process stand-in for the timetable server. Replies are keyed by
/// `"<METHOD> <path>"`; an endpoint without a reply behaves like a server
/// that is down.
#[derive(Default)]
pub struct ScriptedApi {
    replies: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<String>>,
    bodies: Mutex<Vec<(String, Value)>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, endpoint: &str, body: Value) -> Self {
        self.set_reply(endpoint, body);
        self
    }

    pub fn set_reply(&self, endpoint: &str, body: Value) {
        self.replies
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), body);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.calls().iter().filter(|c| *c == endpoint).count()
    }

    pub fn bodies(&self) -> Vec<(String, Value)> {
        self.bodies.lock().unwrap().clone()
    }

    async fn answer<T: DeserializeOwned>(&self, endpoint: String) -> Result<T, AppError> {
        self.calls.lock().unwrap().push(endpoint.clone());
        // Give other in-flight actions a chance to run, like a real request would.
        tokio::task::yield_now().await;

        let reply = self.replies.lock().unwrap().get(&endpoint).cloned();
        match reply {
            Some(body) => Ok(serde_json::from_value(body)?),
            None => Err(AppError::Status {
                status: StatusCode::BAD_GATEWAY,
                body: "upstream unavailable".to_string(),
            }),
        }
    }

    fn record_body(&self, endpoint: &str, body: Value) {
        self.bodies
            .lock()
            .unwrap()
            .push((endpoint.to_string(), body));
    }
}

#[async_trait]
impl TimetableApi for ScriptedApi {
    async fn list_entities(&self, kind: EntityKind) -> Result<Envelope<Vec<Value>>, AppError> {
        self.answer(format!("GET {}", kind.path())).await
    }

    async fn create_entity(&self, kind: EntityKind, fields: &FormFields) -> Result<Ack, AppError> {
        let endpoint = format!("POST {}", kind.path());
        self.record_body(&endpoint, serde_json::to_value(fields)?);
        self.answer(endpoint).await
    }

    async fn validate_data(&self) -> Result<ValidateDataResponse, AppError> {
        self.answer("POST validate-data".to_string()).await
    }

    async fn generate_timetable(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, AppError> {
        self.record_body("POST generate-timetable", serde_json::to_value(request)?);
        self.answer("POST generate-timetable".to_string()).await
    }

    async fn list_timetables(&self) -> Result<Envelope<Vec<Timetable>>, AppError> {
        self.answer("GET timetables".to_string()).await
    }

    async fn fetch_timetable(&self, id: &str) -> Result<Envelope<Timetable>, AppError> {
        self.answer(format!("GET timetable/{}", id)).await
    }

    async fn health(&self) -> Result<HealthResponse, AppError> {
        self.answer("GET health".to_string()).await
    }

    fn export_url(&self, format: ExportFormat, id: &str) -> String {
        format!("http://api.test/export/{}/{}", format.path(), id)
    }
}

pub fn console(api: ScriptedApi) -> (Console, Arc<ScriptedApi>, Arc<MemorySurface>) {
    let api = Arc::new(api);
    let surface = Arc::new(MemorySurface::new());
    let console = Console::new(api.clone(), surface.clone());
    (console, api, surface)
}

pub fn fields(pairs: &[(&str, &str)]) -> FormFields {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
