//! Trash capability: moves a path into a trash root and reports back
//! where it actually landed.
//!
//! This crate does not integrate with a platform recycle bin — that's an
//! external collaborator per the engine's scope. What it provides instead
//! is a batch-scoped quarantine directory that makes `move_to_trash`
//! genuinely reversible (a `rename` back) rather than a `rmdir` in
//! disguise. The returned path is allocated here, not supplied by the
//! caller, which is exactly the wrinkle `ops::move_to_trash` and the
//! executor's back-patching exist to handle.

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

/// Resolves the default trash root: `$DEV_FS_UNDO_TRASH_DIR` if set, else
/// `<data dir>/revertible-fs/trash`. Read fresh on every call rather than
/// cached, so `Config::starred_path`-style overrides stay effective for
/// the lifetime of the process.
pub fn default_trash_root() -> PathBuf {
    if let Ok(custom) = std::env::var("DEV_FS_UNDO_TRASH_DIR") {
        return PathBuf::from(custom);
    }
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("revertible-fs")
        .join("trash")
}

static BATCH_ID: OnceLock<String> = OnceLock::new();

/// One batch id per process run, so repeated calls land under the same
/// subtree without colliding with a previous run's trashed names.
fn batch_id() -> &'static str {
    BATCH_ID.get_or_init(|| {
        format!(
            "{}-{}",
            Utc::now().format("%Y%m%d%H%M%S%3f"),
            std::process::id()
        )
    })
}

/// Moves `original` into the trash under the default root and returns the
/// path it landed at.
pub fn move_to_trash(original: &Path) -> Result<PathBuf> {
    move_to_trash_under(&default_trash_root(), original)
}

/// Moves `original` into the trash under an explicit `root`, returning the
/// path it landed at. Mirrors `original`'s path (minus its filesystem
/// root) under `root`'s current batch directory, disambiguating with a
/// numeric suffix if something is already there under that name — e.g.
/// the same relative path trashed twice in one process run.
pub fn move_to_trash_under(root: &Path, original: &Path) -> Result<PathBuf> {
    let dir = root.join(batch_id());
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create trash batch directory: {}", dir.display()))?;

    let rel = path_to_trash_relpath(original);
    let trashed_path = unique_trash_path(&dir, &rel);

    if let Some(parent) = trashed_path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!(
                "failed to create trash destination directory: {}",
                parent.display()
            )
        })?;
    }

    fs::rename(original, &trashed_path).with_context(|| {
        format!(
            "failed to move to trash: {} -> {}",
            original.display(),
            trashed_path.display()
        )
    })?;

    Ok(trashed_path)
}

fn unique_trash_path(dir: &Path, rel: &Path) -> PathBuf {
    let candidate = dir.join(rel);
    if !candidate.exists() {
        return candidate;
    }

    let parent = candidate
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.to_path_buf());
    let file_name = candidate
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    for suffix in 1..10_000u32 {
        let attempt = parent.join(format!("{file_name}.{suffix}"));
        if !attempt.exists() {
            return attempt;
        }
    }
    candidate
}

fn path_to_trash_relpath(path: &Path) -> PathBuf {
    let mut rel = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::Prefix(prefix) => {
                rel.push(prefix.as_os_str().to_string_lossy().replace(':', ""));
            }
            Component::RootDir => {}
            Component::CurDir | Component::ParentDir | Component::Normal(_) => {
                rel.push(comp.as_os_str());
            }
        }
    }
    rel
}
