use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ANALYZER_URL: &str = "http://127.0.0.1:8000/analyze";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const ANALYZER_URL_VAR: &str = "AUTHENTISCAN_ANALYZER_URL";
const REQUEST_TIMEOUT_VAR: &str = "AUTHENTISCAN_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("AUTHENTISCAN_ANALYZER_URL is not a valid URL ({value}): {reason}")]
    InvalidEndpoint { value: String, reason: String },

    #[error("AUTHENTISCAN_ANALYZER_URL must use http or https, got `{0}`")]
    UnsupportedScheme(String),

    #[error("AUTHENTISCAN_REQUEST_TIMEOUT_SECS must be a positive number of seconds, got `{0}`")]
    InvalidTimeout(String),
}

/// Where the analyzer lives and how long a single request may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub endpoint: Url,
    pub request_timeout: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ANALYZER_URL).expect("default analyzer URL is valid"),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl AnalyzerConfig {
    /// Reads the process environment, after loading an optional `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment overrides from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(ANALYZER_URL_VAR)) {
            config.endpoint = parse_endpoint(&raw)?;
        }

        if let Some(raw) = non_blank(lookup(REQUEST_TIMEOUT_VAR)) {
            config.request_timeout = parse_timeout(&raw)?;
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|err| ConfigError::InvalidEndpoint {
        value: raw.to_string(),
        reason: err.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}
