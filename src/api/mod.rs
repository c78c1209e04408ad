pub mod dto;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ConsoleConfig;
use crate::error::AppError;
use crate::models::{EntityKind, FormFields, Timetable};

pub use dto::{
    Ack, Envelope, GenerateRequest, GenerateResponse, GenerationMetadata, HealthResponse,
    ValidateDataResponse,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    pub fn path(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "excel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Excel => "Excel",
        }
    }
}

/// The timetable server as seen from the console.
#[async_trait]
pub trait TimetableApi: Send + Sync {
    /// Raw rows are returned so a caller can count them without trusting their shape.
    async fn list_entities(&self, kind: EntityKind) -> Result<Envelope<Vec<Value>>, AppError>;
    async fn create_entity(&self, kind: EntityKind, fields: &FormFields) -> Result<Ack, AppError>;
    async fn validate_data(&self) -> Result<ValidateDataResponse, AppError>;
    async fn generate_timetable(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, AppError>;
    async fn list_timetables(&self) -> Result<Envelope<Vec<Timetable>>, AppError>;
    async fn fetch_timetable(&self, id: &str) -> Result<Envelope<Timetable>, AppError>;
    async fn health(&self) -> Result<HealthResponse, AppError>;
    /// Download location; the console never requests it itself.
    fn export_url(&self, format: ExportFormat, id: &str) -> String;
}

pub struct HttpTimetableApi {
    client: Client,
    base: Url,
}

impl HttpTimetableApi {
    pub fn new(config: ConsoleConfig) -> Result<Self, AppError> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            AppError::Config(format!("Invalid base url {:?}: {}", config.base_url, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "Base url {:?} cannot carry a path",
                config.base_url
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, base })
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, AppError> {
        let url = self.url(segments);
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(segments);
        debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        decode(response).await
    }
}

/// Business failures come back as JSON with a non-2xx status, so the body is
/// decoded first and the status only matters when it is not JSON.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    let body = response.text().await?;

    match serde_json::from_str::<T>(&body) {
        Ok(parsed) => Ok(parsed),
        Err(_) if !status.is_success() => {
            warn!("server responded {} with a non-JSON body", status);
            Err(AppError::Status { status, body })
        }
        Err(e) => {
            warn!("failed to parse response body: {}", e);
            Err(AppError::Decode(e.to_string()))
        }
    }
}

#[async_trait]
impl TimetableApi for HttpTimetableApi {
    async fn list_entities(&self, kind: EntityKind) -> Result<Envelope<Vec<Value>>, AppError> {
        self.get_json(&[kind.path()]).await
    }

    async fn create_entity(&self, kind: EntityKind, fields: &FormFields) -> Result<Ack, AppError> {
        self.post_json(&[kind.path()], fields).await
    }

    async fn validate_data(&self) -> Result<ValidateDataResponse, AppError> {
        self.post_json(&["validate-data"], &serde_json::json!({})).await
    }

    async fn generate_timetable(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, AppError> {
        self.post_json(&["generate-timetable"], request).await
    }

    async fn list_timetables(&self) -> Result<Envelope<Vec<Timetable>>, AppError> {
        self.get_json(&["timetables"]).await
    }

    async fn fetch_timetable(&self, id: &str) -> Result<Envelope<Timetable>, AppError> {
        self.get_json(&["timetable", id]).await
    }

    async fn health(&self) -> Result<HealthResponse, AppError> {
        self.get_json(&["health"]).await
    }

    fn export_url(&self, format: ExportFormat, id: &str) -> String {
        self.url(&["export", format.path(), id]).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpTimetableApi {
        HttpTimetableApi::new(ConsoleConfig::new(base)).unwrap()
    }

    #[test]
    fn urls_join_onto_base_path() {
        let api = api("http://localhost:5000/api/");
        assert_eq!(
            api.url(&["timetable", "abc"]).as_str(),
            "http://localhost:5000/api/timetable/abc"
        );
        assert_eq!(
            api.export_url(ExportFormat::Excel, "tt-1"),
            "http://localhost:5000/api/export/excel/tt-1"
        );
    }

    #[test]
    fn ids_are_encoded_as_a_single_segment() {
        let api = api("http://api.test/api");
        assert_eq!(
            api.export_url(ExportFormat::Pdf, "a/b?c#d"),
            "http://api.test/api/export/pdf/a%2Fb%3Fc%23d"
        );
        assert_eq!(
            api.url(&["timetable", "x y"]).as_str(),
            "http://api.test/api/timetable/x%20y"
        );
    }

    #[test]
    fn rejects_unusable_base_url() {
        for base in ["not a url", "mailto:ops@uni.edu"] {
            let err = HttpTimetableApi::new(ConsoleConfig::new(base)).err();
            assert!(matches!(err, Some(AppError::Config(_))), "{base}");
        }
    }
}
