use serde::{Deserialize, Serialize};

/// Inbound payload for one tailoring request. Field names match the extension's JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorRequest {
    pub resume: String,
    pub job_description: String,
    pub job_title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub custom_instructions: Option<String>,
}

/// The two fields recovered from the generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorResult {
    pub resume: String,
    pub cover_letter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_camel_case_and_optional_fields() {
        let json = r#"{
            "resume": "R",
            "jobDescription": "JD",
            "jobTitle": "Engineer",
            "company": "Acme"
        }"#;
        let request: TailorRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.job_description, "JD");
        assert_eq!(request.job_title, "Engineer");
        assert!(request.location.is_none());
        assert!(request.custom_instructions.is_none());
    }

    #[test]
    fn test_request_rejects_missing_required_field() {
        let json = r#"{"resume": "R", "jobTitle": "Engineer", "company": "Acme"}"#;
        assert!(serde_json::from_str::<TailorRequest>(json).is_err());
    }

    #[test]
    fn test_result_serializes_cover_letter_as_camel_case() {
        let result = TailorResult {
            resume: "A".to_string(),
            cover_letter: "B".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["coverLetter"], "B");
        assert!(value.get("cover_letter").is_none());
    }
}
