use crate::config::AnalyzerConfig;
use crate::controller::Submission;
use crate::error::AnalyzeError;
use crate::model::ClassificationResult;
use crate::utils::truncate_label;
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use serde_json::Value;

const IMAGE_FIELD: &str = "image";
const MAX_ERROR_BODY_LEN: usize = 200;

/// HTTP client for the external image analyzer.
#[derive(Debug, Clone)]
pub struct AnalyzerClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl AnalyzerClient {
    pub fn new(config: &AnalyzerConfig) -> Result<Self, AnalyzeError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| AnalyzeError::Network(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn analyze(
        &self,
        submission: &Submission,
    ) -> Result<ClassificationResult, AnalyzeError> {
        let part = Part::bytes(submission.bytes.to_vec())
            .file_name(submission.file_name.clone())
            .mime_str(content_type_for(&submission.file_name))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        log::debug!(
            "POST {} ({} bytes, {:?})",
            self.endpoint,
            submission.bytes.len(),
            submission.ticket
        );
        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AnalyzeError::Server {
                status: Some(status.as_u16()),
                message: truncate_label(body.trim(), MAX_ERROR_BODY_LEN),
            });
        }

        parse_verdict(&body).inspect_err(|err| {
            if let AnalyzeError::Parse(_) = err {
                log::error!(
                    "Analyzer body did not match the expected schema: {}",
                    truncate_label(&body, MAX_ERROR_BODY_LEN)
                );
            }
        })
    }
}

/// Interprets a success-status body: an `{"error": ...}` object is a rejection,
/// anything else must be a verdict.
fn parse_verdict(body: &str) -> Result<ClassificationResult, AnalyzeError> {
    let value: Value = serde_json::from_str(body)?;
    if let Some(error) = value.get("error").and_then(Value::as_str) {
        return Err(AnalyzeError::Server {
            status: None,
            message: error.to_string(),
        });
    }
    Ok(serde_json::from_value(value)?)
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}
