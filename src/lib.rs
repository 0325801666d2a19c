//! A reversible filesystem mutation engine.
//!
//! Eleven primitives (`ops`) each perform one filesystem mutation and
//! return `(ErrorCode, InverseLog)` — the outcome, and the actions that
//! undo whatever actually happened. The `executor` replays a batch of
//! actions, composing those fragments into one reversed inverse log,
//! back-patching the one entry (`moveToTrash`) whose real path isn't
//! known until the call returns, and optionally recording each dispatched
//! action to an `AuditLog` side channel.
//!
//! See `ops` for the primitives, `action::Action` for the wire format,
//! and `executor::execute` for the batch entry point.

pub mod action;
pub mod audit;
pub mod config;
pub mod error;
pub mod executor;
pub mod ops;
pub mod paths;
pub mod shortcut;
pub mod trash;

pub use action::{Action, InverseLog};
pub use audit::AuditLog;
pub use config::Config;
pub use error::ErrorCode;
pub use executor::{execute, ExecutionReport, FailedAction};

use std::path::PathBuf;
use std::sync::OnceLock;

static STARRED_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Resolves the default shortcut target: `$HOME/Documents` (or
/// `$USERPROFILE/Documents` on Windows), read once and cached behind a
/// `OnceLock`. `config.starred_path`, when set, overrides it; pass `None`
/// to fall back to the cached environment-derived default.
pub fn starred_path(config: Option<&Config>) -> PathBuf {
    if let Some(path) = config.and_then(|c| c.starred_path.clone()) {
        return path;
    }
    STARRED_PATH
        .get_or_init(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Documents")
        })
        .clone()
}
