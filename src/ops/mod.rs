//! The eleven primitive filesystem operations.
//!
//! Each function takes a `(prefix, relative)` path pair (plus whatever
//! destination arguments its operation needs) and returns
//! `(ErrorCode, InverseLog)`: the outcome, and the actions that would undo
//! whatever mutation actually happened. Every primitive is a pure wrapper
//! over `std::fs` (or, for `moveToTrash`/`link`/`unlink`, over the
//! `trash`/`shortcut` capabilities) — no two primitives share mutable
//! state, so they compose freely in a batch.

mod copy;
mod create;
mod link;
mod remove;
mod rename;
mod trash_op;

pub use copy::{cpdir, cpfile};
pub use create::{mkpath, touch};
pub use link::{link as make_link, unlink};
pub use remove::{rmdir, rmfile, rmpath};
pub use rename::rename;
pub use trash_op::move_to_trash;

use crate::action::{Action, InverseLog};
use crate::error::ErrorCode;

/// Dispatches a single `Action` to its primitive.
///
/// Mirrors the enum's own shape rather than a name-keyed table — see
/// `Action`'s doc comment for why this engine chose a tagged union over a
/// string-keyed one. `Noop` always succeeds with nothing to undo.
pub fn dispatch(action: &Action) -> (ErrorCode, InverseLog) {
    match action {
        Action::RmFile { pre, rel } => rmfile(pre, rel),
        Action::RmPath { pre, rel } => rmpath(pre, rel),
        Action::RmDir { pre, rel } => rmdir(pre, rel),
        Action::MoveToTrash { pre, rel } => move_to_trash(pre, rel),
        Action::Touch { pre, rel } => touch(pre, rel),
        Action::MkPath { pre, rel } => mkpath(pre, rel),
        Action::Rename { pre, rel, to, to_rel } => rename(pre, rel, to, to_rel),
        Action::CpFile { pre, rel, to } => cpfile(pre, rel, to),
        Action::CpDir { pre, rel, to } => cpdir(pre, rel, to),
        Action::Link { pre, rel, to } => make_link(pre, rel, to),
        Action::Unlink { pre, rel, to } => unlink(pre, rel, to),
        Action::Noop => (ErrorCode::Ok, Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_dispatches_to_ok_with_empty_log() {
        let (code, log) = dispatch(&Action::Noop);
        assert_eq!(code, ErrorCode::Ok);
        assert!(log.is_empty());
    }
}
