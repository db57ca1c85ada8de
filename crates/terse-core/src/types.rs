//! Core types for prompt optimization

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rewrite strength tier
///
/// `Gentle` skips the phrase-shortening rules entirely. `Medium` and
/// `Aggressive` enable the same rule set; nothing else distinguishes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggressiveness {
    Gentle,
    #[default]
    Medium,
    Aggressive,
}

impl Aggressiveness {
    pub fn shortens_phrases(&self) -> bool {
        matches!(self, Aggressiveness::Medium | Aggressiveness::Aggressive)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Aggressiveness::Gentle => "gentle",
            Aggressiveness::Medium => "medium",
            Aggressiveness::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for Aggressiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown aggressiveness {0:?} (expected gentle, medium, or aggressive)")]
pub struct ParseAggressivenessError(String);

impl FromStr for Aggressiveness {
    type Err = ParseAggressivenessError;

    /// Empty input selects the default tier, `medium`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gentle" => Ok(Aggressiveness::Gentle),
            "" | "medium" => Ok(Aggressiveness::Medium),
            "aggressive" => Ok(Aggressiveness::Aggressive),
            other => Err(ParseAggressivenessError(other.to_string())),
        }
    }
}

/// Options for a single optimization request
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Keep courtesy words instead of stripping them
    pub preserve_politeness: bool,
    pub aggressiveness: Aggressiveness,
}

/// Result of one optimization request
///
/// Ephemeral: owned by the request and discarded after display. Savings
/// deltas feed the ledger, they are not persisted from here.
#[derive(Debug, Clone, Serialize)]
pub struct Optimization {
    pub original_tokens: usize,
    pub optimized_text: String,
    pub optimized_tokens: usize,
    /// May be negative when a rewrite grows the text
    pub tokens_saved: i64,
    pub cost_saved: f64,
    pub latency_seconds: f64,
}
