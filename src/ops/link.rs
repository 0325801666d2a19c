//! `link` and `unlink` — shortcut creation/removal primitives.
//!
//! A shortcut lives at `to/rel + ".lnk"` and is created by the
//! `shortcut` capability (an OS-level concern, delegated per the
//! engine's scope). Replacing an existing shortcut goes through the
//! trash capability rather than a bare delete, so the replacement itself
//! stays undoable.

use crate::action::{Action, InverseLog};
use crate::error::ErrorCode;
use crate::paths;
use crate::shortcut;
use crate::trash;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

const LNK_SUFFIX: &str = ".lnk";

fn with_lnk_suffix(path: PathBuf) -> PathBuf {
    let mut os_string: OsString = path.into_os_string();
    os_string.push(LNK_SUFFIX);
    PathBuf::from(os_string)
}

pub fn link(pre: &str, rel: &str, to: &str) -> (ErrorCode, InverseLog) {
    let src = paths::absolute(pre, rel);
    if !src.exists() {
        return (ErrorCode::SrcInexist, Vec::new());
    }

    let to_dir = paths::absolute(to, "");
    if !to_dir.is_dir() {
        return (ErrorCode::DstDirInexist, Vec::new());
    }

    let link_path = with_lnk_suffix(paths::absolute(to, rel));
    let mut log = Vec::new();

    if link_path.exists() {
        match trash::move_to_trash(&link_path) {
            Ok(trashed) => {
                log.push(Action::rename(
                    "",
                    trashed.to_string_lossy().into_owned(),
                    "",
                    link_path.to_string_lossy().into_owned(),
                ));
            }
            Err(_) => return (ErrorCode::CannotRemoveFile, log),
        }
    }

    if let Some(parent) = link_path.parent() {
        if !parent.exists() {
            if fs::create_dir_all(parent).is_err() {
                return (ErrorCode::DstPreDirCannotMake, log);
            }
            log.push(Action::rm_path("", parent.to_string_lossy().into_owned()));
        }
    }

    match shortcut::make_link(&src, &link_path) {
        Ok(()) => {
            let link_rel = format!("{rel}{LNK_SUFFIX}");
            log.push(Action::Unlink {
                pre: pre.to_string(),
                rel: link_rel,
                to: to.to_string(),
            });
            (ErrorCode::Ok, log)
        }
        Err(_) => (ErrorCode::CannotMakeLink, log),
    }
}

pub fn unlink(pre: &str, rel: &str, to: &str) -> (ErrorCode, InverseLog) {
    let link_path = paths::absolute(to, rel);
    if !link_path.exists() {
        return (ErrorCode::Ok, Vec::new());
    }

    match shortcut::remove_link(&link_path) {
        Ok(()) => {
            let stripped = rel.strip_suffix(LNK_SUFFIX).unwrap_or(rel);
            (
                ErrorCode::Ok,
                vec![Action::Link {
                    pre: pre.to_string(),
                    rel: stripped.to_string(),
                    to: to.to_string(),
                }],
            )
        }
        Err(_) => (ErrorCode::CannotRemoveLink, Vec::new()),
    }
}
