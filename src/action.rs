//! The action wire format: a tagged union of the eleven primitives plus a
//! `Noop` sentinel, and the inverse-log type built from it.

use std::fmt;

/// One filesystem action, as carried in a batch or in an inverse log.
///
/// This is the statically-checked equivalent of the heterogeneous
/// `(op-name, arg1, arg2, ...)` tuple: an exhaustive enum the compiler can
/// check every `match` against, rather than a runtime string dispatch.
/// `Noop` stands in for the wire format's "empty tuple" — a skipped or
/// already-replayed entry that the executor passes over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    RmFile {
        pre: String,
        rel: String,
    },
    RmPath {
        pre: String,
        rel: String,
    },
    RmDir {
        pre: String,
        rel: String,
    },
    MoveToTrash {
        pre: String,
        rel: String,
    },
    Touch {
        pre: String,
        rel: String,
    },
    MkPath {
        pre: String,
        rel: String,
    },
    Rename {
        pre: String,
        rel: String,
        to: String,
        to_rel: String,
    },
    CpFile {
        pre: String,
        rel: String,
        to: String,
    },
    CpDir {
        pre: String,
        rel: String,
        to: String,
    },
    Link {
        pre: String,
        rel: String,
        to: String,
    },
    Unlink {
        pre: String,
        rel: String,
        to: String,
    },
    /// Sentinel for a skipped / already-replayed entry.
    Noop,
}

impl Action {
    pub fn rm_file(pre: impl Into<String>, rel: impl Into<String>) -> Self {
        Action::RmFile {
            pre: pre.into(),
            rel: rel.into(),
        }
    }

    pub fn rm_path(pre: impl Into<String>, rel: impl Into<String>) -> Self {
        Action::RmPath {
            pre: pre.into(),
            rel: rel.into(),
        }
    }

    pub fn mk_path(pre: impl Into<String>, rel: impl Into<String>) -> Self {
        Action::MkPath {
            pre: pre.into(),
            rel: rel.into(),
        }
    }

    pub fn rename(
        pre: impl Into<String>,
        rel: impl Into<String>,
        to: impl Into<String>,
        to_rel: impl Into<String>,
    ) -> Self {
        Action::Rename {
            pre: pre.into(),
            rel: rel.into(),
            to: to.into(),
            to_rel: to_rel.into(),
        }
    }

    /// The wire-format operation name, e.g. `"rmfile"`.
    pub fn op_name(&self) -> &'static str {
        match self {
            Action::RmFile { .. } => "rmfile",
            Action::RmPath { .. } => "rmpath",
            Action::RmDir { .. } => "rmdir",
            Action::MoveToTrash { .. } => "moveToTrash",
            Action::Touch { .. } => "touch",
            Action::MkPath { .. } => "mkpath",
            Action::Rename { .. } => "rename",
            Action::CpFile { .. } => "cpfile",
            Action::CpDir { .. } => "cpdir",
            Action::Link { .. } => "link",
            Action::Unlink { .. } => "unlink",
            Action::Noop => "noop",
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Action::Noop)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::RmFile { pre, rel } => write!(f, "rmfile({pre:?}, {rel:?})"),
            Action::RmPath { pre, rel } => write!(f, "rmpath({pre:?}, {rel:?})"),
            Action::RmDir { pre, rel } => write!(f, "rmdir({pre:?}, {rel:?})"),
            Action::MoveToTrash { pre, rel } => write!(f, "moveToTrash({pre:?}, {rel:?})"),
            Action::Touch { pre, rel } => write!(f, "touch({pre:?}, {rel:?})"),
            Action::MkPath { pre, rel } => write!(f, "mkpath({pre:?}, {rel:?})"),
            Action::Rename {
                pre,
                rel,
                to,
                to_rel,
            } => write!(f, "rename({pre:?}, {rel:?}, {to:?}, {to_rel:?})"),
            Action::CpFile { pre, rel, to } => write!(f, "cpfile({pre:?}, {rel:?}, {to:?})"),
            Action::CpDir { pre, rel, to } => write!(f, "cpdir({pre:?}, {rel:?}, {to:?})"),
            Action::Link { pre, rel, to } => write!(f, "link({pre:?}, {rel:?}, {to:?})"),
            Action::Unlink { pre, rel, to } => write!(f, "unlink({pre:?}, {rel:?}, {to:?})"),
            Action::Noop => write!(f, "noop()"),
        }
    }
}

/// Ordered sequence of actions that, replayed in order, undoes a forward
/// operation's side effects. The executor composes these by appending as
/// each forward action runs, then reversing the whole thing once.
pub type InverseLog = Vec<Action>;
