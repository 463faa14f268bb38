//! Response Segmenter — recovers the tailored resume and cover letter from free-form model output.
//!
//! The model is asked to wrap each section in explicit markers, but the format is a request,
//! not a guarantee. Extraction runs an ordered cascade of pure strategies:
//!
//! 1. `explicit_markers` — text strictly between each START/END pair, per section
//! 2. `legacy_separator` — split on `---`, strip leading section labels
//! 3. `heading_lines`    — line walk switching section on RESUME / COVER LETTER headings
//!
//! A later tier only fills fields the earlier tiers left empty, and only sees the text outside
//! any marked span tier 1 already recovered. If no tier recovers a resume,
//! the whole raw text becomes the resume and the cover letter becomes a fixed sentinel.
//! Segmentation never fails.

use std::borrow::Cow;
use std::ops::Range;

use tracing::debug;

use crate::config::SegmenterConfig;
use crate::models::tailor::TailorResult;
use crate::tailoring::prompts::{
    COVER_LETTER_END, COVER_LETTER_START, COVER_LETTER_UNPARSEABLE, LEGACY_SEPARATOR,
    RESUME_END, RESUME_START,
};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Partial result of a single tier. `None` means the tier could not recover that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
}

impl Sections {
    fn new(resume: String, cover_letter: String) -> Self {
        Self {
            resume: non_empty(resume),
            cover_letter: non_empty(cover_letter),
        }
    }
}

/// Which strategy produced a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    ExplicitMarkers,
    LegacySeparator,
    HeadingLines,
    Fallback,
}

/// Full segmenter output: the result plus provenance and the quality-gate verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub result: TailorResult,
    pub resume_source: Tier,
    pub cover_letter_source: Tier,
    /// Set when either field is shorter than its configured minimum. Never alters `result`.
    pub low_confidence: bool,
}

type Strategy = fn(&str, &SegmenterConfig) -> Sections;

/// Tiers in the order they are attempted.
pub const TIERS: &[(Tier, Strategy)] = &[
    (Tier::ExplicitMarkers, explicit_markers as Strategy),
    (Tier::LegacySeparator, legacy_separator as Strategy),
    (Tier::HeadingLines, heading_lines as Strategy),
];

// ────────────────────────────────────────────────────────────────────────────
// Cascade
// ────────────────────────────────────────────────────────────────────────────

/// Splits generated text into resume and cover letter. Pure function of its inputs.
pub fn segment(text: &str, config: &SegmenterConfig) -> Segmentation {
    let mut resume: Option<(String, Tier)> = None;
    let mut cover_letter: Option<(String, Tier)> = None;
    let mut input: Cow<'_, str> = Cow::Borrowed(text);

    for (tier, strategy) in TIERS {
        if resume.is_some() && cover_letter.is_some() {
            break;
        }

        let sections = strategy(&input, config);
        debug!(
            "Segmenter tier {:?}: resume={}, cover_letter={}",
            tier,
            sections.resume.is_some(),
            sections.cover_letter.is_some()
        );

        if *tier == Tier::ExplicitMarkers {
            input = Cow::Owned(without_recovered_spans(&input, &sections));
        }

        if resume.is_none() {
            resume = sections.resume.map(|r| (r, *tier));
        }
        if cover_letter.is_none() {
            cover_letter = sections.cover_letter.map(|c| (c, *tier));
        }
    }

    let (result, resume_source, cover_letter_source) = match (resume, cover_letter) {
        (Some((resume, resume_tier)), Some((cover_letter, cover_tier))) => (
            TailorResult {
                resume,
                cover_letter,
            },
            resume_tier,
            cover_tier,
        ),
        (Some((resume, resume_tier)), None) => (
            TailorResult {
                resume,
                cover_letter: COVER_LETTER_UNPARSEABLE.to_string(),
            },
            resume_tier,
            Tier::Fallback,
        ),
        (None, _) => (
            TailorResult {
                resume: text.to_string(),
                cover_letter: COVER_LETTER_UNPARSEABLE.to_string(),
            },
            Tier::Fallback,
            Tier::Fallback,
        ),
    };

    let low_confidence = result.resume.chars().count() < config.min_resume_chars
        || result.cover_letter.chars().count() < config.min_cover_letter_chars;

    Segmentation {
        result,
        resume_source,
        cover_letter_source,
        low_confidence,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tier 1 — explicit markers
// ────────────────────────────────────────────────────────────────────────────

/// Each section is extracted independently; one may succeed while the other is `None`.
pub fn explicit_markers(text: &str, _config: &SegmenterConfig) -> Sections {
    Sections {
        resume: between(text, RESUME_START, RESUME_END),
        cover_letter: between(text, COVER_LETTER_START, COVER_LETTER_END),
    }
}

/// Trimmed text strictly between the first `start` and the next `end` after it.
fn between(text: &str, start: &str, end: &str) -> Option<String> {
    let span = marked_span(text, start, end)?;
    non_empty(
        text[span.start + start.len()..span.end - end.len()]
            .trim()
            .to_string(),
    )
}

/// Byte range from the first `start` marker through the next `end` marker, both included.
fn marked_span(text: &str, start: &str, end: &str) -> Option<Range<usize>> {
    let open = text.find(start)?;
    let inner = open + start.len();
    let close = inner + text[inner..].find(end)?;
    Some(open..close + end.len())
}

/// `text` with the marked span of every recovered section cut out.
fn without_recovered_spans(text: &str, sections: &Sections) -> String {
    let mut spans: Vec<Range<usize>> = Vec::new();
    if sections.resume.is_some() {
        spans.extend(marked_span(text, RESUME_START, RESUME_END));
    }
    if sections.cover_letter.is_some() {
        spans.extend(marked_span(text, COVER_LETTER_START, COVER_LETTER_END));
    }
    spans.sort_by_key(|span| span.start);

    let mut residual = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        if span.start >= cursor {
            residual.push_str(&text[cursor..span.start]);
        }
        cursor = cursor.max(span.end);
    }
    residual.push_str(&text[cursor..]);
    residual
}

// ────────────────────────────────────────────────────────────────────────────
// Tier 2 — legacy separator
// ────────────────────────────────────────────────────────────────────────────

const RESUME_LABELS: &[&str] = &["TAILORED RESUME:", "TAILORED RESUME", "RESUME:", "RESUME"];
const COVER_LETTER_LABELS: &[&str] = &["COVER LETTER:", "COVER LETTER"];

/// First `---` part is the resume, second is the cover letter. Skipped with no separator.
pub fn legacy_separator(text: &str, _config: &SegmenterConfig) -> Sections {
    let mut parts = text.split(LEGACY_SEPARATOR);
    let (Some(first), Some(second)) = (parts.next(), parts.next()) else {
        return Sections::default();
    };

    Sections::new(
        strip_label(first.trim(), RESUME_LABELS).trim().to_string(),
        strip_label(second.trim(), COVER_LETTER_LABELS)
            .trim()
            .to_string(),
    )
}

/// Removes the first matching label from the start of `text`, ignoring ASCII case.
/// A label without a colon must be followed by a colon, whitespace, or nothing.
fn strip_label<'a>(text: &'a str, labels: &[&str]) -> &'a str {
    labels
        .iter()
        .find_map(|label| {
            text.get(..label.len())
                .filter(|prefix| prefix.eq_ignore_ascii_case(label))
                .map(|_| &text[label.len()..])
                .filter(|rest| {
                    label.ends_with(':')
                        || rest.is_empty()
                        || rest.starts_with(|c: char| c.is_whitespace() || c == ':')
                })
        })
        .unwrap_or(text)
}

// ────────────────────────────────────────────────────────────────────────────
// Tier 3 — heading lines
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Resume,
    CoverLetter,
}

/// Walks lines, switching section on heading lines and on marker lines. A START marker
/// opens its section, an END marker closes it. Headings and markers are dropped, as is any
/// text outside a section. Body lines keep their original whitespace.
pub fn heading_lines(text: &str, config: &SegmenterConfig) -> Sections {
    let mut current = Section::None;
    let mut resume_lines: Vec<&str> = Vec::new();
    let mut cover_letter_lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        if let Some(next) = marker_transition(line.trim()) {
            current = next;
            continue;
        }

        let upper = line.to_uppercase();

        if upper.contains("RESUME")
            && !upper.contains("COVER")
            && line.trim().chars().count() < config.heading_max_chars
        {
            current = Section::Resume;
            continue;
        }
        if upper.contains("COVER LETTER") {
            current = Section::CoverLetter;
            continue;
        }

        match current {
            Section::Resume => resume_lines.push(line),
            Section::CoverLetter => cover_letter_lines.push(line),
            Section::None => {}
        }
    }

    Sections::new(
        resume_lines.join("\n").trim().to_string(),
        cover_letter_lines.join("\n").trim().to_string(),
    )
}

fn marker_transition(line: &str) -> Option<Section> {
    match line {
        RESUME_START => Some(Section::Resume),
        COVER_LETTER_START => Some(Section::CoverLetter),
        RESUME_END | COVER_LETTER_END => Some(Section::None),
        _ => None,
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
