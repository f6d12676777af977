use serde::Deserialize;

use crate::error::{Error, Result};
use crate::findings::{KeyFinding, extract_key_findings};

/// Response body of the insights service's executive-summary endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutiveSummary {
    pub success: bool,
    /// Markdown-like summary text, or an error message when `success` is false
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_findings: Vec<KeyFinding>,
    #[serde(default)]
    pub data_context: Option<DataContext>,
}

/// Aggregate figures the summary was written from
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DataContext {
    pub total_interviews: u64,
    pub avg_age: f64,
    pub top_positive_themes: Vec<String>,
    pub top_concerns: Vec<String>,
    pub top_brands: Vec<String>,
}

impl ExecutiveSummary {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The summary text, if the service managed to produce one.
    pub fn renderable_text(&self) -> Result<&str> {
        if self.success {
            Ok(&self.summary)
        } else {
            Err(Error::SummaryUnavailable(self.summary.clone()))
        }
    }

    /// Findings sent with the payload, or extracted from the text when absent.
    pub fn findings(&self) -> Vec<KeyFinding> {
        if self.key_findings.is_empty() {
            extract_key_findings(&self.summary)
        } else {
            self.key_findings.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAYLOAD: &str = r###"{
        "success": true,
        "summary": "## Summary\n### Key Findings\n1. Price\nPromotions win",
        "key_findings": [],
        "data_context": {
            "total_interviews": 24,
            "avg_age": 38.5,
            "top_positive_themes": ["Scent"],
            "top_concerns": ["Dry hands"],
            "top_brands": ["Sunlight", "Lipon"]
        }
    }"###;

    #[test]
    fn decodes_api_payload() {
        let payload = ExecutiveSummary::from_json(PAYLOAD).unwrap();
        assert!(payload.success);
        assert_eq!(payload.renderable_text().unwrap(), "## Summary\n### Key Findings\n1. Price\nPromotions win");
        let context = payload.data_context.unwrap();
        assert_eq!(context.total_interviews, 24);
        assert_eq!(context.top_brands, vec!["Sunlight", "Lipon"]);
    }

    #[test]
    fn findings_fall_back_to_extraction() {
        let payload = ExecutiveSummary::from_json(PAYLOAD).unwrap();
        let findings = payload.findings();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].title, "1. Price");
        assert_eq!(findings[0].description, "Promotions win");
    }

    #[test]
    fn payload_findings_take_priority() {
        let payload = ExecutiveSummary::from_json(
            r#"{"success": true, "summary": "", "key_findings": [{"title": "Given"}]}"#,
        )
        .unwrap();
        assert_eq!(
            payload.findings(),
            vec![KeyFinding {
                title: "Given".to_string(),
                ..KeyFinding::default()
            }]
        );
    }

    #[test]
    fn failed_payload_is_unavailable() {
        let payload = ExecutiveSummary::from_json(
            r#"{"success": false, "summary": "OpenAI API not configured.", "data_context": null}"#,
        )
        .unwrap();
        assert!(payload.data_context.is_none());
        let err = payload.renderable_text().unwrap_err();
        assert_eq!(err.to_string(), "executive summary unavailable: OpenAI API not configured.");
    }

    #[test]
    fn malformed_json_is_a_payload_error() {
        let err = ExecutiveSummary::from_json("{\"success\": ").unwrap_err();
        assert!(matches!(err, Error::Payload(_)));
    }
}
