use serde::Deserialize;
use std::fmt;

/// Verdict returned by the analyzer for one image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassificationResult {
    pub image_type: String,
    #[serde(default)]
    pub subtype: Option<String>,
    pub confidence: Confidence,
    #[serde(default)]
    pub reason: Vec<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

impl ClassificationResult {
    /// The subtype, or `None` when it is absent or blank.
    pub fn subtype(&self) -> Option<&str> {
        self.subtype
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// The analyzer reports confidence either as a number or as a preformatted label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Score(serde_json::Number),
    Label(String),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Score(number) => write!(f, "{number}"),
            Confidence::Label(label) => f.write_str(label),
        }
    }
}
