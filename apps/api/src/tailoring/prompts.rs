// Prompt fragments and the delimiter tokens the model is asked to emit.
// The segmenter reads the same constants, so the two can never drift apart.

pub const RESUME_START: &str = "===RESUME_START===";
pub const RESUME_END: &str = "===RESUME_END===";
pub const COVER_LETTER_START: &str = "===COVER_LETTER_START===";
pub const COVER_LETTER_END: &str = "===COVER_LETTER_END===";

/// Horizontal rule used by the older single-separator output format.
pub const LEGACY_SEPARATOR: &str = "---";

/// Returned in place of a cover letter that could not be recovered.
pub const COVER_LETTER_UNPARSEABLE: &str =
    "Cover letter could not be parsed from the generated response. Please try again.";

pub const ROLE_FRAMING: &str = "You are an expert resume writer and career coach. \
Your task is to tailor a resume and create a compelling cover letter for a specific job application.";

/// Numbered instructions. Item 1 is critical: models tend to drop sections otherwise.
pub const TAILORING_INSTRUCTIONS: &str = r#"INSTRUCTIONS:
1. Tailor EVERY section of the original resume. Do NOT summarize, shorten, or omit any section, role, project, or education entry.
2. Analyze the job description carefully to identify key requirements, skills, and qualifications.
3. Rewrite each section to highlight the experience, skills, and achievements most relevant to this role.
4. Use keywords from the job description naturally throughout the resume.
5. Keep the original resume's structure and section order; optimize the wording for this position.
6. Write a cover letter of 3-4 paragraphs that:
   - Opens with a strong hook related to the company or role
   - Highlights 2-3 key achievements or experiences that make the candidate a strong fit
   - Shows enthusiasm for the company and cultural fit
   - Ends with a clear call to action
   - Is professional but personable"#;

/// Output format directive. Replace `{resume_start}`, `{resume_end}`,
/// `{cover_letter_start}`, `{cover_letter_end}` before sending.
pub const OUTPUT_FORMAT_TEMPLATE: &str = r#"OUTPUT FORMAT (follow exactly):
Wrap the tailored resume between {resume_start} and {resume_end}.
Wrap the cover letter between {cover_letter_start} and {cover_letter_end}.
Each marker must appear on its own line. Do not write anything outside the two marked sections.

{resume_start}
[Tailored resume here]
{resume_end}

{cover_letter_start}
[Cover letter here]
{cover_letter_end}"#;
