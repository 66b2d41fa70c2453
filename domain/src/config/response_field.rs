//! Response contract value object

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which JSON field of a successful response carries the classification.
///
/// `label` is the canonical contract of the classification service. `result`
/// exists for deployments that proxy the service behind a hosting layer that
/// answers with `{"result": ...}`. A deployment reads exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseField {
    #[default]
    Label,
    Result,
}

impl ResponseField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseField::Label => "label",
            ResponseField::Result => "result",
        }
    }

    /// Read this field from a response body. Only string values count.
    pub fn extract(&self, body: &serde_json::Value) -> Option<String> {
        body.get(self.as_str())
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}

impl std::fmt::Display for ResponseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResponseField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "label" => Ok(ResponseField::Label),
            "result" => Ok(ResponseField::Result),
            other => Err(format!(
                "unknown response field: {} (expected label or result)",
                other
            )),
        }
    }
}
