//! Data contract of the remote image-detection service.
//!
//! Every field is optional: the service is external and its responses are not trusted.

use crate::connectors::ConnectorError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageDetectionResult {
    #[serde(default, alias = "doshaPrediction")]
    pub dosha_prediction: Option<String>,
    #[serde(default, alias = "diseasePrediction")]
    pub disease_prediction: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Free-form features extracted by the classifier
    #[serde(default)]
    pub features: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, alias = "explanation", alias = "explanationMarkdown")]
    pub explanation_markdown: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageDetectionResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<ImageDetectionResult>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ImageDetectionResponse {
    /// Unwraps `data`, treating an explicit failure or a missing payload as an error.
    pub fn into_result(self) -> Result<ImageDetectionResult, ConnectorError> {
        if let Some(error) = self.error {
            return Err(ConnectorError::InvalidResponse(error));
        }
        if self.success == Some(false) {
            return Err(ConnectorError::InvalidResponse(
                "detection service reported failure".to_string(),
            ));
        }
        self.data.ok_or_else(|| {
            ConnectorError::InvalidResponse("detection response carries no data".to_string())
        })
    }
}

/// Explanation split into remedy, avoid and recommendation lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedDetectionResult {
    pub remedies: Vec<String>,
    pub avoid: Vec<String>,
    pub recommendations: Vec<String>,
    pub diagnosis: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Remedies,
    Avoid,
    Recommendations,
    Diagnosis,
}

impl Section {
    fn from_heading(heading: &str) -> Self {
        let heading = heading.to_lowercase();
        if heading.contains("remed") {
            Section::Remedies
        } else if heading.contains("avoid") {
            Section::Avoid
        } else if heading.contains("recommend") {
            Section::Recommendations
        } else {
            Section::Diagnosis
        }
    }
}

lazy_static! {
    static ref HEADING: Regex = Regex::new(r"^\s*(?:#{1,6}\s+(.+?)|\*\*(.+?)\*\*:?)\s*:?\s*$").unwrap();
    static ref BULLET: Regex = Regex::new(r"^\s*(?:[-*•]|\d+[.)])\s+(.+?)\s*$").unwrap();
}

impl ParsedDetectionResult {
    pub fn from_markdown(markdown: &str) -> Self {
        let mut parsed = ParsedDetectionResult::default();
        let mut diagnosis: Vec<&str> = vec![];
        let mut section = Section::Diagnosis;

        for line in markdown.lines() {
            if let Some(caps) = HEADING.captures(line) {
                let heading = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
                section = Section::from_heading(heading);
                if section == Section::Diagnosis {
                    diagnosis.push(line.trim());
                }
                continue;
            }

            let item = BULLET
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string());

            match (section, item) {
                (Section::Remedies, Some(item)) => parsed.remedies.push(item),
                (Section::Avoid, Some(item)) => parsed.avoid.push(item),
                (Section::Recommendations, Some(item)) => parsed.recommendations.push(item),
                (Section::Diagnosis, _) => diagnosis.push(line.trim_end()),
                // prose inside a list section is not part of any list
                _ => {}
            }
        }

        parsed.diagnosis = diagnosis.join("\n").trim().to_string();
        parsed
    }
}

impl From<&ImageDetectionResult> for ParsedDetectionResult {
    fn from(result: &ImageDetectionResult) -> Self {
        result
            .explanation_markdown
            .as_deref()
            .map(ParsedDetectionResult::from_markdown)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPLANATION: &str = "## Analysis\n\
Your tongue shows a thick white coating.\n\
\n\
### Remedies\n\
- Drink warm ginger tea\n\
- Practice oil pulling\n\
\n\
**Foods to Avoid:**\n\
* Cold drinks\n\
* Dairy at night\n\
\n\
## Recommendations\n\
1. Sleep before 10pm\n\
2) Walk after meals\n\
Stay consistent.\n";

    #[test]
    fn splits_sections() {
        let parsed = ParsedDetectionResult::from_markdown(EXPLANATION);
        assert_eq!(
            parsed.remedies,
            vec!["Drink warm ginger tea", "Practice oil pulling"]
        );
        assert_eq!(parsed.avoid, vec!["Cold drinks", "Dairy at night"]);
        assert_eq!(
            parsed.recommendations,
            vec!["Sleep before 10pm", "Walk after meals"]
        );
        assert_eq!(
            parsed.diagnosis,
            "## Analysis\nYour tongue shows a thick white coating."
        );
    }

    #[test]
    fn plain_text_is_diagnosis() {
        let parsed = ParsedDetectionResult::from_markdown("Balanced vata.\n- a note");
        assert!(parsed.remedies.is_empty());
        assert_eq!(parsed.diagnosis, "Balanced vata.\n- a note");
    }

    #[test]
    fn tolerates_sparse_response() {
        let response: ImageDetectionResponse =
            serde_json::from_str(r#"{"success":true,"data":{"doshaPrediction":"pitta"}}"#)
                .unwrap();
        let result = response.into_result().unwrap();
        assert_eq!(result.dosha_prediction.as_deref(), Some("pitta"));
        assert!(result.confidence.is_none());
        assert_eq!(
            ParsedDetectionResult::from(&result),
            ParsedDetectionResult::default()
        );
    }

    #[test]
    fn failure_response_is_error() {
        let response: ImageDetectionResponse =
            serde_json::from_str(r#"{"success":false,"error":"blurry image"}"#).unwrap();
        assert!(matches!(
            response.into_result(),
            Err(ConnectorError::InvalidResponse(msg)) if msg == "blurry image"
        ));

        let response: ImageDetectionResponse =
            serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(
            response.into_result(),
            Err(ConnectorError::InvalidResponse(_))
        ));
    }
}
