//! `touch` and `mkpath` — the two creation primitives.

use crate::action::{Action, InverseLog};
use crate::error::ErrorCode;
use crate::paths;
use std::fs::{self, File};

/// Creates an empty regular file at `pre/rel`, making any missing parent
/// directories along the way. Idempotent: an already-existing target is
/// treated as success with nothing to undo.
pub fn touch(pre: &str, rel: &str) -> (ErrorCode, InverseLog) {
    let pre_path = paths::absolute(pre, "");
    if !pre_path.is_dir() {
        return (ErrorCode::DstDirInexist, Vec::new());
    }

    let path = paths::absolute(pre, rel);
    if path.exists() {
        return (ErrorCode::Ok, Vec::new());
    }

    let mut log = Vec::new();
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            if fs::create_dir_all(parent).is_err() {
                return (ErrorCode::DstPreDirCannotMake, log);
            }
            log.push(Action::rm_path("", parent.to_string_lossy().into_owned()));
        }
    }

    match File::options().write(true).create_new(true).open(&path) {
        Ok(_file) => {
            log.push(Action::rm_file(pre, rel));
            (ErrorCode::Ok, log)
        }
        Err(_) => (ErrorCode::UnknownError, log),
    }
}

/// Creates the full directory chain `pre/rel`. Idempotent: an
/// already-existing target is treated as success with nothing to undo.
pub fn mkpath(pre: &str, rel: &str) -> (ErrorCode, InverseLog) {
    let pre_path = paths::absolute(pre, "");
    if !pre_path.is_dir() {
        return (ErrorCode::DstDirInexist, Vec::new());
    }

    let path = paths::absolute(pre, rel);
    if path.exists() {
        return (ErrorCode::Ok, Vec::new());
    }

    match fs::create_dir_all(&path) {
        Ok(()) => (ErrorCode::Ok, vec![Action::rm_path(pre, rel)]),
        Err(_) => (ErrorCode::UnknownError, Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn touch_creates_file_and_chain() {
        let temp = TempDir::new().unwrap();
        let pre = temp.path().to_str().unwrap();

        let (code, log) = touch(pre, "path/to/x.json");
        assert_eq!(code, ErrorCode::Ok);
        assert!(temp.path().join("path/to/x.json").is_file());
        assert_eq!(log.len(), 2);
        assert_eq!(log[1], Action::rm_file(pre, "path/to/x.json"));
    }

    #[test]
    fn touch_existing_is_idempotent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "x").unwrap();

        let (code, log) = touch(temp.path().to_str().unwrap(), "a.txt");
        assert_eq!(code, ErrorCode::Ok);
        assert!(log.is_empty());
    }

    #[test]
    fn touch_missing_pre_dir_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let (code, log) = touch(missing.to_str().unwrap(), "a.txt");
        assert_eq!(code, ErrorCode::DstDirInexist);
        assert!(log.is_empty());
    }

    #[test]
    fn mkpath_creates_chain() {
        let temp = TempDir::new().unwrap();
        let pre = temp.path().to_str().unwrap();

        let (code, log) = mkpath(pre, "a/b/c");
        assert_eq!(code, ErrorCode::Ok);
        assert!(temp.path().join("a/b/c").is_dir());
        assert_eq!(log, vec![Action::rm_path(pre, "a/b/c")]);
    }

    #[test]
    fn mkpath_existing_is_idempotent() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a")).unwrap();

        let (code, log) = mkpath(temp.path().to_str().unwrap(), "a");
        assert_eq!(code, ErrorCode::Ok);
        assert!(log.is_empty());
    }
}
