//! The savings store: load, commit, history

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

use crate::io::{append_jsonl, read_jsonl, replace_file};
use crate::paths::Paths;
use crate::types::{LedgerError, RunRecord, SavingsRecord};

/// Durable store for cumulative savings plus run history
///
/// Single-process, single-writer. The mutex makes the in-process
/// load, apply, save sequence atomic; it does not coordinate across
/// processes.
#[derive(Debug)]
pub struct SavingsStore {
    savings_path: PathBuf,
    runs_path: Option<PathBuf>,
    commit_lock: Mutex<()>,
}

impl SavingsStore {
    /// Store at the standard home-relative location
    pub fn open_default() -> std::io::Result<Self> {
        let paths = Paths::new()?;
        Ok(Self::new(
            paths.savings_file(),
            Some(paths.runs_file()),
        ))
    }

    /// Store on explicit paths; `runs_path: None` disables history
    pub fn new(savings_path: PathBuf, runs_path: Option<PathBuf>) -> Self {
        Self {
            savings_path,
            runs_path,
            commit_lock: Mutex::new(()),
        }
    }

    /// Read the current totals
    ///
    /// Any failure (missing file, unreadable file, malformed JSON) yields
    /// the seed record. Load never errors.
    pub fn load(&self) -> SavingsRecord {
        match std::fs::read_to_string(&self.savings_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(record) => record,
                Err(err) => {
                    debug!(path = %self.savings_path.display(), %err, "unparsable savings record, seeding");
                    SavingsRecord::seed()
                }
            },
            Err(err) => {
                debug!(path = %self.savings_path.display(), %err, "no savings record, seeding");
                SavingsRecord::seed()
            }
        }
    }

    /// Overwrite the totals on disk. Failure propagates; there is no retry.
    pub fn save(&self, record: &SavingsRecord) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(record)?;
        replace_file(&self.savings_path, json.as_bytes())
    }

    /// Fold one run into the totals and persist them
    ///
    /// Holds the commit lock for the whole load, apply, save sequence;
    /// released on every exit path. The history append is best-effort: a
    /// failed append is logged and the committed totals stand.
    pub fn commit(&self, run: &RunRecord) -> Result<SavingsRecord, LedgerError> {
        let _guard = self
            .commit_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut record = self.load();
        record.apply(run.tokens_saved, run.cost_saved);
        self.save(&record)?;
        debug!(
            tokens_saved = run.tokens_saved,
            total = record.total_tokens_saved,
            "committed savings"
        );

        if let Some(runs_path) = &self.runs_path {
            if let Err(err) = append_jsonl(runs_path, run) {
                warn!(path = %runs_path.display(), %err, "failed to append run history");
            }
        }

        Ok(record)
    }

    /// All recorded runs, oldest first; empty when history is disabled
    pub fn runs(&self) -> Vec<RunRecord> {
        let Some(runs_path) = &self.runs_path else {
            return Vec::new();
        };
        read_jsonl(runs_path).unwrap_or_default()
    }
}
