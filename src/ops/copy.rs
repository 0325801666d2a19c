//! `cpfile` and `cpdir` — copy primitives. Both copy into `to/rel`,
//! preserving the source's relative name, and never overwrite.

use crate::action::{Action, InverseLog};
use crate::error::ErrorCode;
use crate::paths;
use std::fs;
use walkdir::WalkDir;

pub fn cpfile(pre: &str, rel: &str, to: &str) -> (ErrorCode, InverseLog) {
    let src = paths::absolute(pre, rel);
    if !src.exists() {
        return (ErrorCode::SrcInexist, Vec::new());
    }

    let to_dir = paths::absolute(to, "");
    if !to_dir.is_dir() {
        return (ErrorCode::DstDirInexist, Vec::new());
    }

    let dst = paths::absolute(to, rel);
    if dst.exists() {
        return (ErrorCode::DstFileAlreadyExist, Vec::new());
    }

    let mut log = Vec::new();
    if let Some(parent) = dst.parent() {
        if !parent.exists() {
            if fs::create_dir_all(parent).is_err() {
                return (ErrorCode::DstPreDirCannotMake, Vec::new());
            }
            log.push(Action::rm_path("", parent.to_string_lossy().into_owned()));
        }
    }

    match fs::copy(&src, &dst) {
        Ok(_) => {
            log.push(Action::rm_file(to, rel));
            (ErrorCode::Ok, log)
        }
        Err(_) => (ErrorCode::UnknownError, log),
    }
}

/// Recursively copies `pre/rel` to `to/rel`, pre-order, files and
/// subdirectories alike. Each created directory and copied file gets its
/// own inverse entry, so a partial failure mid-tree still leaves a log
/// that undoes exactly what landed on disk.
pub fn cpdir(pre: &str, rel: &str, to: &str) -> (ErrorCode, InverseLog) {
    let src = paths::absolute(pre, rel);
    if !src.exists() {
        return (ErrorCode::SrcInexist, Vec::new());
    }

    let to_dir = paths::absolute(to, "");
    if !to_dir.is_dir() {
        return (ErrorCode::DstDirInexist, Vec::new());
    }

    let dst_root = paths::absolute(to, rel);
    if dst_root.exists() {
        return (ErrorCode::DstFolderAlreadyExist, Vec::new());
    }

    let mut log = Vec::new();
    if fs::create_dir_all(&dst_root).is_err() {
        return (ErrorCode::UnknownError, Vec::new());
    }
    log.push(Action::rm_path(to, rel));

    let dst_root_str = dst_root.to_string_lossy().into_owned();

    for entry in WalkDir::new(&src).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => return (ErrorCode::UnknownError, log),
        };
        let sub = match entry.path().strip_prefix(&src) {
            Ok(sub) => sub,
            Err(_) => continue,
        };
        let sub_str = sub.to_string_lossy().into_owned();
        let dst_entry = dst_root.join(sub);

        if entry.file_type().is_dir() {
            if dst_entry.is_file() {
                return (ErrorCode::DstFileAlreadyExist, log);
            }
            if fs::create_dir_all(&dst_entry).is_err() {
                return (ErrorCode::UnknownError, log);
            }
            log.push(Action::rm_path(dst_root_str.as_str(), sub_str));
        } else {
            if fs::copy(entry.path(), &dst_entry).is_err() {
                return (ErrorCode::UnknownError, log);
            }
            log.push(Action::rm_file(dst_root_str.as_str(), sub_str));
        }
    }

    (ErrorCode::Ok, log)
}
