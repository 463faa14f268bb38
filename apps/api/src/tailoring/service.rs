//! Tailoring pipeline: build prompt → one generation call → segment → quality gate.

use tracing::{info, warn};
use uuid::Uuid;

use crate::config::SegmenterConfig;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::tailor::{TailorRequest, TailorResult};
use crate::tailoring::prompt_builder::build_prompt;
use crate::tailoring::segmenter::segment;

/// Runs one stateless tailoring request.
///
/// Fails only when the generation call fails (missing key, transport, empty content).
/// Malformed output is absorbed by the segmenter.
pub async fn tailor(
    generator: &dyn TextGenerator,
    segmenter_config: &SegmenterConfig,
    request: &TailorRequest,
) -> Result<TailorResult, AppError> {
    let request_id = Uuid::new_v4();
    info!(
        "[{request_id}] Tailoring resume for '{}' at '{}'",
        request.job_title, request.company
    );

    let prompt = build_prompt(request);
    let generated = generator.generate(&prompt).await?;
    info!(
        "[{request_id}] Generated {} chars with model {}",
        generated.chars().count(),
        generator.model()
    );

    let segmentation = segment(&generated, segmenter_config);
    info!(
        "[{request_id}] Segmented: resume via {:?}, cover letter via {:?}",
        segmentation.resume_source, segmentation.cover_letter_source
    );

    if segmentation.low_confidence {
        warn!(
            "[{request_id}] Low-confidence output: resume={} chars (min {}), cover_letter={} chars (min {}); manual review advised",
            segmentation.result.resume.chars().count(),
            segmenter_config.min_resume_chars,
            segmentation.result.cover_letter.chars().count(),
            segmenter_config.min_cover_letter_chars
        );
    }

    Ok(segmentation.result)
}
