use thiserror::Error;

/// Every way a classification request can fail. All of them are recoverable:
/// the user can retry the same image or pick another one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error("Could not reach the analyzer: {0}")]
    Network(String),

    #[error("{}", server_message(.status, .message))]
    Server {
        status: Option<u16>,
        message: String,
    },

    #[error("Unexpected analyzer response: {0}")]
    Parse(String),
}

impl AnalyzeError {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyzeError::Network(_) => "network",
            AnalyzeError::Server { .. } => "server",
            AnalyzeError::Parse(_) => "parse",
        }
    }
}

fn server_message(status: &Option<u16>, message: &str) -> String {
    match *status {
        Some(code) if message.is_empty() => format!("Analyzer returned HTTP {code}"),
        Some(code) => format!("Analyzer returned HTTP {code}: {message}"),
        None => format!("Analyzer rejected the image: {message}"),
    }
}

impl From<reqwest::Error> for AnalyzeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return AnalyzeError::Parse(err.to_string());
        }
        if let Some(status) = err.status() {
            return AnalyzeError::Server {
                status: Some(status.as_u16()),
                message: err.to_string(),
            };
        }
        AnalyzeError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AnalyzeError {
    fn from(err: serde_json::Error) -> Self {
        AnalyzeError::Parse(err.to_string())
    }
}
