//! Ledger record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seed totals used when no prior record exists or it fails to load
pub const SEED_TOKENS_SAVED: i64 = 12_345;
pub const SEED_COST_SAVED: f64 = 246.90;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("ledger encoding: {0}")]
    Json(#[from] serde_json::Error),
}

/// Cumulative savings, persisted as pretty JSON
///
/// `total_tokens_saved` normally only grows, but a single run may carry a
/// negative delta and there is no floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsRecord {
    pub total_tokens_saved: i64,
    pub total_cost_saved: f64,
}

impl SavingsRecord {
    pub fn seed() -> Self {
        Self {
            total_tokens_saved: SEED_TOKENS_SAVED,
            total_cost_saved: SEED_COST_SAVED,
        }
    }

    /// Add one run's deltas to the totals
    pub fn apply(&mut self, tokens_saved: i64, cost_saved: f64) {
        self.total_tokens_saved += tokens_saved;
        self.total_cost_saved += cost_saved;
    }
}

/// One optimization run, appended to the JSONL history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub timestamp: DateTime<Utc>,
    pub original_tokens: usize,
    pub optimized_tokens: usize,
    pub tokens_saved: i64,
    pub cost_saved: f64,
    #[serde(default)]
    pub preserve_politeness: bool,
    #[serde(default)]
    pub aggressiveness: String,
    #[serde(default)]
    pub latency_seconds: f64,
}
