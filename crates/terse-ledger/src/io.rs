//! File plumbing for the ledger

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::types::LedgerError;

fn ensure_parent(path: &Path) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Append one record as a JSONL line, creating the file and its directory
/// on first use
pub fn append_jsonl<T: Serialize>(path: &Path, record: &T) -> Result<(), LedgerError> {
    ensure_parent(path)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let line = serde_json::to_string(record)?;
    writeln!(file, "{line}")?;
    Ok(())
}

/// Read every well-formed record from a JSONL file
///
/// A missing file reads as empty. Blank and malformed lines are skipped so
/// one corrupt entry cannot poison the history.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LedgerError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(record) = serde_json::from_str(&line) {
            records.push(record);
        }
    }
    Ok(records)
}

/// Overwrite a file via temp-file + rename
pub fn replace_file(path: &Path, data: &[u8]) -> Result<(), LedgerError> {
    ensure_parent(path)?;
    let staging = path.with_extension("tmp");
    std::fs::write(&staging, data)?;
    std::fs::rename(staging, path)?;
    Ok(())
}
