//! Durable savings ledger: cumulative totals plus per-run history

mod io;
mod paths;
mod store;
mod types;

pub use io::{append_jsonl, read_jsonl, replace_file};
pub use paths::Paths;
pub use store::SavingsStore;
pub use types::{LedgerError, RunRecord, SavingsRecord, SEED_COST_SAVED, SEED_TOKENS_SAVED};
