use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Sampling and transport parameters for the generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 4000,
            temperature: 0.7,
            timeout_secs: 120,
        }
    }
}

/// Thresholds used by the response segmenter.
///
/// `heading_max_chars`: a line containing RESUME must be shorter than this to count as a heading.
/// `min_*_chars`: below these, a segmented field is flagged as low confidence (logging only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmenterConfig {
    pub heading_max_chars: usize,
    pub min_resume_chars: usize,
    pub min_cover_letter_chars: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            heading_max_chars: 50,
            min_resume_chars: 200,
            min_cover_letter_chars: 100,
        }
    }
}

/// Application configuration loaded from environment variables.
/// The API key is optional at startup; every outbound call re-checks its presence.
#[derive(Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub anthropic_api_url: String,
    pub generation: GenerationParams,
    pub segmenter: SegmenterConfig,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let generation_defaults = GenerationParams::default();
        let segmenter_defaults = SegmenterConfig::default();

        Ok(Config {
            anthropic_api_key: get("ANTHROPIC_API_KEY"),
            anthropic_api_url: get("ANTHROPIC_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            generation: GenerationParams {
                model: get("ANTHROPIC_MODEL").unwrap_or(generation_defaults.model),
                max_tokens: parse_or(
                    "LLM_MAX_TOKENS",
                    get("LLM_MAX_TOKENS"),
                    generation_defaults.max_tokens,
                )?,
                temperature: parse_or(
                    "LLM_TEMPERATURE",
                    get("LLM_TEMPERATURE"),
                    generation_defaults.temperature,
                )?,
                timeout_secs: parse_or(
                    "LLM_TIMEOUT_SECS",
                    get("LLM_TIMEOUT_SECS"),
                    generation_defaults.timeout_secs,
                )?,
            },
            segmenter: SegmenterConfig {
                heading_max_chars: parse_or(
                    "SEGMENT_HEADING_MAX_CHARS",
                    get("SEGMENT_HEADING_MAX_CHARS"),
                    segmenter_defaults.heading_max_chars,
                )?,
                min_resume_chars: parse_or(
                    "SEGMENT_MIN_RESUME_CHARS",
                    get("SEGMENT_MIN_RESUME_CHARS"),
                    segmenter_defaults.min_resume_chars,
                )?,
                min_cover_letter_chars: parse_or(
                    "SEGMENT_MIN_COVER_LETTER_CHARS",
                    get("SEGMENT_MIN_COVER_LETTER_CHARS"),
                    segmenter_defaults.min_cover_letter_chars,
                )?,
            },
            port: parse_or("PORT", get("PORT"), 8000)?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn api_key_configured(&self) -> bool {
        self.anthropic_api_key.is_some()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "anthropic_api_key",
                &self.anthropic_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("anthropic_api_url", &self.anthropic_api_url)
            .field("generation", &self.generation)
            .field("segmenter", &self.segmenter)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {value}")),
        None => Ok(default),
    }
}
