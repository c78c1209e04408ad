use std::env;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    pub base_url: String,
    /// `None` leaves requests without a client-side deadline.
    pub timeout: Option<Duration>,
}

impl ConsoleConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn new_from_env() -> Result<Self, AppError> {
        let base_url = env::var("TIMETABLE_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = match env::var("TIMETABLE_HTTP_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    AppError::Config(format!(
                        "TIMETABLE_HTTP_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                        raw
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            timeout,
            ..Self::new(base_url)
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ConsoleConfig::new("http://localhost:5000/api/");
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn with_base_url_overrides_and_keeps_timeout() {
        let mut config = ConsoleConfig::new(DEFAULT_BASE_URL);
        config.timeout = Some(Duration::from_secs(5));
        let config = config.with_base_url("http://example.test/api");
        assert_eq!(config.base_url, "http://example.test/api");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
