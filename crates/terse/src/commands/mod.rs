pub mod optimize;
pub mod session;
pub mod summary;
pub mod version;

use terse_core::{Optimization, Options};
use terse_ledger::RunRecord;

pub(crate) fn run_record(result: &Optimization, opts: &Options) -> RunRecord {
    RunRecord {
        timestamp: chrono::Utc::now(),
        original_tokens: result.original_tokens,
        optimized_tokens: result.optimized_tokens,
        tokens_saved: result.tokens_saved,
        cost_saved: result.cost_saved,
        preserve_politeness: opts.preserve_politeness,
        aggressiveness: opts.aggressiveness.to_string(),
        latency_seconds: result.latency_seconds,
    }
}
