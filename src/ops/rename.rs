//! `rename` — move/rename a file or directory, never overwriting.

use crate::action::{Action, InverseLog};
use crate::error::ErrorCode;
use crate::paths;
use std::fs;

pub fn rename(pre: &str, rel: &str, to: &str, to_rel: &str) -> (ErrorCode, InverseLog) {
    let src = paths::absolute(pre, rel);
    if !src.exists() {
        return (ErrorCode::SrcInexist, Vec::new());
    }

    let dst = paths::absolute(to, to_rel);
    if dst.exists() {
        return (ErrorCode::DstFileOrPathAlreadyExist, Vec::new());
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

    match fs::rename(&src, &dst) {
        Ok(()) => {
            log.push(Action::rename(to, to_rel, pre, rel));
            (ErrorCode::Ok, log)
        }
        Err(_) => (ErrorCode::UnknownError, log),
    }
}
