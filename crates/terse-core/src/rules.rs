//! Substitution rule tables for the optimization pipeline
//!
//! All patterns are compiled once and cached. Matching is case-insensitive
//! throughout; phrase shortenings are escaped literals, not tokenized.

use regex::Regex;
use std::sync::OnceLock;

static POLITENESS_RE: OnceLock<Regex> = OnceLock::new();
static FILLER_RES: OnceLock<Vec<Regex>> = OnceLock::new();
static EXCLAMATION_RE: OnceLock<Regex> = OnceLock::new();
static SHORTENING_RES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
static COMMA_SPACING_RE: OnceLock<Regex> = OnceLock::new();
static COMMA_RUN_RE: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

/// Filler openers and courtesy padding, removed unconditionally.
/// Apostrophes match both the typographic and straight forms.
const FILLER_PATTERNS: &[&str] = &[
    r"(?i)\b(?:hello|dear|assistant)\b",
    r"(?i)I hope you[’']?re doing well\.",
    r"(?i)I[’']d be very grateful if you could",
    r"(?i)so much for your help",
];

/// Phrase shortenings, applied in this order. Overlapping spans go to the
/// earlier-listed rule since each rule runs over the whole text in turn.
const SHORTENINGS: &[(&str, &str)] = &[
    ("at this point in time", "now"),
    ("in the event that", "if"),
    ("with regard to", "about"),
    ("due to the fact that", "because"),
    ("in order to", "to"),
    ("as a matter of fact", "in fact"),
];

pub(crate) fn politeness() -> &'static Regex {
    POLITENESS_RE
        .get_or_init(|| Regex::new(r"(?i)\b(?:please|kindly|thank you|thanks)\b").unwrap())
}

pub(crate) fn fillers() -> &'static [Regex] {
    FILLER_RES.get_or_init(|| {
        FILLER_PATTERNS
            .iter()
            .map(|p| Regex::new(p).unwrap())
            .collect()
    })
}

pub(crate) fn exclamations() -> &'static Regex {
    EXCLAMATION_RE.get_or_init(|| Regex::new(r"!+").unwrap())
}

pub(crate) fn shortenings() -> &'static [(Regex, &'static str)] {
    SHORTENING_RES.get_or_init(|| {
        SHORTENINGS
            .iter()
            .map(|(phrase, short)| {
                let re = Regex::new(&format!("(?i){}", regex::escape(phrase))).unwrap();
                (re, *short)
            })
            .collect()
    })
}

pub(crate) fn comma_spacing() -> &'static Regex {
    COMMA_SPACING_RE.get_or_init(|| Regex::new(r"\s*,\s*").unwrap())
}

pub(crate) fn comma_runs() -> &'static Regex {
    COMMA_RUN_RE.get_or_init(|| Regex::new(r",\s*,+").unwrap())
}

pub(crate) fn whitespace() -> &'static Regex {
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}
