//! Path resolution for ledger files

use std::path::{Path, PathBuf};

/// Resolves where the ledger lives on disk
///
/// Everything sits under one home-relative dot-directory. Tests bypass this
/// by constructing the store on explicit paths.
#[derive(Debug, Clone)]
pub struct Paths {
    data_dir: PathBuf,
}

impl Paths {
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;
        Ok(Self {
            data_dir: home.join(".terse"),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Cumulative totals, pretty JSON
    pub fn savings_file(&self) -> PathBuf {
        self.data_dir.join("savings.json")
    }

    /// Per-run history, JSONL
    pub fn runs_file(&self) -> PathBuf {
        self.data_dir.join("runs.jsonl")
    }
}
