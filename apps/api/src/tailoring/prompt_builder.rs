//! Prompt Builder — assembles the single instruction block sent to the generation service.
//!
//! Fields are inserted verbatim. No escaping is done: the consumer is a language model,
//! and prompt manipulation through these fields is an accepted risk.

use crate::models::tailor::TailorRequest;
use crate::tailoring::prompts::{
    COVER_LETTER_END, COVER_LETTER_START, OUTPUT_FORMAT_TEMPLATE, RESUME_END, RESUME_START,
    ROLE_FRAMING, TAILORING_INSTRUCTIONS,
};

const LOCATION_UNSPECIFIED: &str = "Not specified";

/// Builds the tailoring prompt for one request.
pub fn build_prompt(request: &TailorRequest) -> String {
    let location = non_blank(request.location.as_deref()).unwrap_or(LOCATION_UNSPECIFIED);

    let mut prompt = format!(
        "{ROLE_FRAMING}\n\n\
         JOB DETAILS:\n\
         - Position: {title}\n\
         - Company: {company}\n\
         - Location: {location}\n\n\
         JOB DESCRIPTION:\n{description}\n\n\
         ORIGINAL RESUME:\n{resume}\n\n",
        title = request.job_title,
        company = request.company,
        description = request.job_description,
        resume = request.resume,
    );

    if let Some(custom) = non_blank(request.custom_instructions.as_deref()) {
        prompt.push_str("ADDITIONAL INSTRUCTIONS FROM THE CANDIDATE:\n");
        prompt.push_str(custom);
        prompt.push_str("\n\n");
    }

    prompt.push_str(TAILORING_INSTRUCTIONS);
    prompt.push_str("\n\n");
    prompt.push_str(&output_format());

    prompt
}

fn output_format() -> String {
    OUTPUT_FORMAT_TEMPLATE
        .replace("{resume_start}", RESUME_START)
        .replace("{resume_end}", RESUME_END)
        .replace("{cover_letter_start}", COVER_LETTER_START)
        .replace("{cover_letter_end}", COVER_LETTER_END)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TailorRequest {
        TailorRequest {
            resume: "Jane Doe\nSenior Engineer at Initech".to_string(),
            job_description: "Build distributed systems in Rust.".to_string(),
            job_title: "Staff Engineer".to_string(),
            company: "Acme Corp".to_string(),
            location: Some("Berlin".to_string()),
            custom_instructions: None,
        }
    }

    #[test]
    fn test_fields_are_interpolated_verbatim() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("- Position: Staff Engineer"));
        assert!(prompt.contains("- Company: Acme Corp"));
        assert!(prompt.contains("- Location: Berlin"));
        assert!(prompt.contains("JOB DESCRIPTION:\nBuild distributed systems in Rust."));
        assert!(prompt.contains("ORIGINAL RESUME:\nJane Doe\nSenior Engineer at Initech"));
    }

    #[test]
    fn test_missing_location_renders_as_not_specified() {
        let mut req = request();
        req.location = None;
        assert!(build_prompt(&req).contains("- Location: Not specified"));

        req.location = Some("  ".to_string());
        assert!(build_prompt(&req).contains("- Location: Not specified"));
    }

    #[test]
    fn test_custom_instructions_included_when_present() {
        let mut req = request();
        req.custom_instructions = Some("Emphasize open-source work.".to_string());
        let prompt = build_prompt(&req);
        assert!(prompt
            .contains("ADDITIONAL INSTRUCTIONS FROM THE CANDIDATE:\nEmphasize open-source work."));
    }

    #[test]
    fn test_blank_custom_instructions_leave_no_heading() {
        let mut req = request();
        req.custom_instructions = Some(" \n\t".to_string());
        assert!(!build_prompt(&req).contains("ADDITIONAL INSTRUCTIONS"));

        req.custom_instructions = None;
        assert!(!build_prompt(&req).contains("ADDITIONAL INSTRUCTIONS"));
    }

    #[test]
    fn test_output_format_names_all_markers() {
        let prompt = build_prompt(&request());
        for marker in [RESUME_START, RESUME_END, COVER_LETTER_START, COVER_LETTER_END] {
            assert!(prompt.contains(marker), "missing marker {marker}");
        }
        assert!(!prompt.contains("{resume_start}"));
    }

    #[test]
    fn test_instructions_precede_output_format() {
        let prompt = build_prompt(&request());
        let instructions = prompt.find("INSTRUCTIONS:\n1.").unwrap();
        let format = prompt.find("OUTPUT FORMAT").unwrap();
        assert!(instructions < format);
        assert!(prompt.contains("3-4 paragraphs"));
        assert!(prompt.contains("call to action"));
    }
}
