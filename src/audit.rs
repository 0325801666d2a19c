//! Operation log: an append-only JSONL side channel recording every
//! primitive call and its outcome.
//!
//! Nothing in the primitive or executor contracts depends on this — per
//! the spec, logging/printing is a side channel (§1). It exists purely so
//! an embedder can answer "what did this engine actually do" after the
//! fact, the way this codebase's other JSONL logs do.

use crate::action::Action;
use crate::config::Config;
use crate::error::ErrorCode;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const DEFAULT_AUDIT_FILENAME: &str = "operations.jsonl";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationRecord {
    pub ts: String,
    pub op: String,
    pub args: Vec<String>,
    pub result: String,
    pub recovered: usize,
}

#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
    enabled: bool,
    max_size_bytes: u64,
}

impl AuditLog {
    pub fn from_config(config: &Config) -> Self {
        let path = config
            .audit
            .path
            .clone()
            .unwrap_or_else(default_audit_path);
        Self {
            path,
            enabled: config.audit.enabled,
            max_size_bytes: config.audit.max_size_mb.saturating_mul(1024 * 1024),
        }
    }

    pub fn new(path: PathBuf, enabled: bool, max_size_bytes: u64) -> Self {
        Self {
            path,
            enabled,
            max_size_bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records one primitive call: the action attempted, the error code it
    /// returned, and how many inverse-log entries it produced.
    pub fn log(&self, action: &Action, result: ErrorCode, recovered: usize) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let record = OperationRecord {
            ts: Utc::now().to_rfc3339(),
            op: action.op_name().to_string(),
            args: action_args(action),
            result: result.to_string(),
            recovered,
        };
        self.append(&record)
    }

    fn append(&self, record: &OperationRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create audit directory: {}", parent.display()))?;
        }

        self.rotate_if_needed()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open audit log: {}", self.path.display()))?;

        serde_json::to_writer(&mut file, record)?;
        writeln!(file)?;
        Ok(())
    }

    pub fn read_records(&self) -> Result<Vec<OperationRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read audit log: {}", self.path.display()))?;

        let mut out = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Ok(record) = serde_json::from_str::<OperationRecord>(line) {
                out.push(record);
            }
        }
        Ok(out)
    }

    fn rotate_if_needed(&self) -> Result<()> {
        if self.max_size_bytes == 0 || !self.path.exists() {
            return Ok(());
        }
        let metadata = fs::metadata(&self.path)?;
        if metadata.len() <= self.max_size_bytes {
            return Ok(());
        }

        let rotated = self.path.with_extension("jsonl.old");
        let _ = fs::remove_file(&rotated);
        fs::rename(&self.path, &rotated).with_context(|| {
            format!(
                "failed to rotate audit log: {} -> {}",
                self.path.display(),
                rotated.display()
            )
        })
    }
}

fn action_args(action: &Action) -> Vec<String> {
    match action {
        Action::RmFile { pre, rel }
        | Action::RmPath { pre, rel }
        | Action::RmDir { pre, rel }
        | Action::MoveToTrash { pre, rel }
        | Action::Touch { pre, rel }
        | Action::MkPath { pre, rel } => vec![pre.clone(), rel.clone()],
        Action::Rename {
            pre,
            rel,
            to,
            to_rel,
        } => vec![pre.clone(), rel.clone(), to.clone(), to_rel.clone()],
        Action::CpFile { pre, rel, to }
        | Action::CpDir { pre, rel, to }
        | Action::Link { pre, rel, to }
        | Action::Unlink { pre, rel, to } => vec![pre.clone(), rel.clone(), to.clone()],
        Action::Noop => Vec::new(),
    }
}

pub fn default_audit_path() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("revertible-fs")
        .join(DEFAULT_AUDIT_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn logs_and_reads_back_a_record() {
        let temp = TempDir::new().unwrap();
        let log = AuditLog::new(temp.path().join("operations.jsonl"), true, 1024 * 1024);

        log.log(&Action::rm_file("/root", "a.txt"), ErrorCode::Ok, 0)
            .unwrap();

        let records = log.read_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].op, "rmfile");
        assert_eq!(records[0].result, "OK");
    }

    #[test]
    fn disabled_log_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("operations.jsonl");
        let log = AuditLog::new(path.clone(), false, 1024 * 1024);

        log.log(&Action::rm_file("/root", "a.txt"), ErrorCode::Ok, 0)
            .unwrap();

        assert!(!path.exists());
    }
}
