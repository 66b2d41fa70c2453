//! Submission configuration from TOML (`[submission]` section)

use clarity_application::FormConfig;
use serde::{Deserialize, Serialize};

/// Raw submission configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSubmissionConfig {
    /// Send a submit even while an earlier one is in flight. The response
    /// that arrives last then decides the shown result.
    pub allow_overlap: bool,
    /// Replace the generic failure message
    pub failure_message: Option<String>,
}

impl FileSubmissionConfig {
    /// Convert to the application's form configuration
    pub fn to_form_config(&self) -> FormConfig {
        let config = FormConfig::from_allow_overlap(self.allow_overlap);
        match &self.failure_message {
            Some(message) => config.with_failure_message(message.clone()),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_application::DEFAULT_FAILURE_MESSAGE;
    use clarity_domain::SubmitGuard;

    #[test]
    fn test_default_rejects_overlap() {
        let config = FileSubmissionConfig::default().to_form_config();
        assert_eq!(config.guard, SubmitGuard::RejectWhileLoading);
        assert_eq!(config.failure_message, DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_overlap_and_message() {
        let toml_str = r#"
[submission]
allow_overlap = true
failure_message = "Classifier unavailable"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let form = config.submission.to_form_config();
        assert_eq!(form.guard, SubmitGuard::AllowOverlap);
        assert_eq!(form.failure_message, "Classifier unavailable");
    }
}
