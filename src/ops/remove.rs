//! `rmfile`, `rmpath`, `rmdir` — the three non-trash removal primitives.
//!
//! All three are destructive by design: the spec documents `rmfile` and
//! `rmdir` as non-recoverable (empty inverse log on success). Only
//! `rmpath`, which only ever removes directories it can prove are empty,
//! is its own safe inverse of `mkpath`.

use crate::action::{Action, InverseLog};
use crate::error::ErrorCode;
use crate::paths;
use std::fs;
use std::path::Path;

/// Removes a single file. Non-recoverable: file contents can't be
/// reconstructed, so a successful removal returns an empty inverse log.
pub fn rmfile(pre: &str, rel: &str) -> (ErrorCode, InverseLog) {
    let path = paths::absolute(pre, rel);
    if !path.exists() {
        return (ErrorCode::Ok, Vec::new());
    }
    match fs::remove_file(&path) {
        Ok(()) => (ErrorCode::Ok, Vec::new()),
        Err(_) => (ErrorCode::CannotRemoveFile, Vec::new()),
    }
}

/// Removes an empty directory chain: the leaf at `pre/rel`, then as many
/// now-empty ancestors *within `rel`* as will come away, stopping at the
/// first one that isn't empty (or can't be removed for any other reason).
/// Ascension never passes `pre` itself — `pre` is the caller's anchor, not
/// part of the chain this call is allowed to unwind — so this is the exact
/// inverse of `mkpath`, which only ever creates components under `pre`.
pub fn rmpath(pre: &str, rel: &str) -> (ErrorCode, InverseLog) {
    let path = paths::absolute(pre, rel);
    if !path.exists() {
        return (ErrorCode::Ok, Vec::new());
    }
    if fs::remove_dir(&path).is_err() {
        return (ErrorCode::CannotRemoveDir, Vec::new());
    }

    let boundary = paths::absolute(pre, "");
    let mut ancestor: Option<std::path::PathBuf> = path.parent().map(Path::to_path_buf);
    while let Some(dir) = ancestor {
        if dir == boundary {
            break;
        }
        if fs::remove_dir(&dir).is_err() {
            break;
        }
        ancestor = dir.parent().map(Path::to_path_buf);
    }

    (ErrorCode::Ok, vec![Action::mk_path(pre, rel)])
}

/// Recursively removes a directory tree. Non-recoverable, like `rmfile`.
pub fn rmdir(pre: &str, rel: &str) -> (ErrorCode, InverseLog) {
    let path = paths::absolute(pre, rel);
    if !path.exists() {
        return (ErrorCode::Ok, Vec::new());
    }
    match fs::remove_dir_all(&path) {
        Ok(()) => (ErrorCode::Ok, Vec::new()),
        Err(_) => (ErrorCode::CannotRemoveDir, Vec::new()),
    }
}
