// Resume tailoring: prompt construction, one generation call, response segmentation.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod handlers;
pub mod prompt_builder;
pub mod prompts;
pub mod segmenter;
pub mod service;
