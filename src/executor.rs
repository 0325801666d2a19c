//! Batch executor: replays a list of actions, dispatching each to its
//! primitive, and composes the per-call inverse fragments into one
//! reversed inverse log.
//!
//! The one wrinkle the primitive layer can't handle on its own is
//! `moveToTrash`'s back-patching: the trash capability allocates the
//! landing path only once the call actually runs, so a caller who built a
//! forward batch up front (`src_command`) can't have written the real
//! trash path into it. The executor rewrites that caller-held log in
//! place as it goes, per §9 of the spec.

use crate::action::{Action, InverseLog};
use crate::audit::AuditLog;
use crate::error::ErrorCode;
use crate::ops;

/// One action in a batch that failed, paired with the code it returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedAction {
    pub index: usize,
    pub action: Action,
    pub code: ErrorCode,
}

/// Result of replaying a batch: whether every action succeeded, the
/// actions that didn't (if any), and the composed inverse log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionReport {
    pub ok: bool,
    pub failed: Vec<FailedAction>,
    pub inverse_log: InverseLog,
}

/// Replays `batch` in order, dispatching each action to its primitive.
///
/// `src_command`, when given, is the original forward batch whose
/// `moveToTrash` entries get back-patched: replaying `src_command[len - 1
/// - i]` against the just-discovered trash path keeps that caller-held
/// log accurate for a subsequent reverse-playback. Pass `None` when the
/// caller has no such log to maintain (e.g. executing a one-off batch
/// that will never itself be replayed).
///
/// `audit`, when given, receives one record per dispatched action (§10.2)
/// — the outcome and how many inverse entries it produced. This is the
/// only place an `AuditLog` is ever written from, since it's the only
/// place every primitive invocation this engine actually runs passes
/// through. A logging failure never affects the batch's own outcome.
pub fn execute(
    batch: &[Action],
    src_command: Option<&mut Vec<Action>>,
    audit: Option<&AuditLog>,
) -> ExecutionReport {
    let mut inverse_log = InverseLog::new();
    let mut failed = Vec::new();
    let mut src_command = src_command;

    for (i, action) in batch.iter().enumerate() {
        if action.is_noop() {
            continue;
        }

        let (code, mut recover_fragment) = ops::dispatch(action);
        if let Some(audit) = audit {
            let _ = audit.log(action, code, recover_fragment.len());
        }
        if !code.is_ok() {
            failed.push(FailedAction {
                index: i,
                action: action.clone(),
                code,
            });
        }

        if matches!(action, Action::MoveToTrash { .. }) {
            if let Some(src) = src_command.as_deref_mut() {
                assert!(
                    recover_fragment.len() <= 1,
                    "moveToTrash must produce at most one inverse entry"
                );
                let patched = recover_fragment.first().cloned().unwrap_or(Action::Noop);
                let patch_index = src.len().checked_sub(1 + i);
                if let Some(patch_index) = patch_index {
                    src[patch_index] = patched;
                }
            }
        }

        inverse_log.append(&mut recover_fragment);
    }

    inverse_log.reverse();
    ExecutionReport {
        ok: failed.is_empty(),
        failed,
        inverse_log,
    }
}

/// Looks up a primitive by its wire-format name, for callers that build
/// actions dynamically (e.g. from a deserialized plan) rather than
/// constructing `Action` variants directly.
pub fn dispatch_by_name(name: &str, args: &[&str]) -> Option<(ErrorCode, InverseLog)> {
    let action = match (name, args) {
        ("rmfile", [pre, rel]) => Action::rm_file(*pre, *rel),
        ("rmpath", [pre, rel]) => Action::rm_path(*pre, *rel),
        ("rmdir", [pre, rel]) => Action::RmDir {
            pre: pre.to_string(),
            rel: rel.to_string(),
        },
        ("moveToTrash", [pre, rel]) => Action::MoveToTrash {
            pre: pre.to_string(),
            rel: rel.to_string(),
        },
        ("touch", [pre, rel]) => Action::Touch {
            pre: pre.to_string(),
            rel: rel.to_string(),
        },
        ("mkpath", [pre, rel]) => Action::mk_path(*pre, *rel),
        ("rename", [pre, rel, to, to_rel]) => Action::rename(*pre, *rel, *to, *to_rel),
        ("cpfile", [pre, rel, to]) => Action::CpFile {
            pre: pre.to_string(),
            rel: rel.to_string(),
            to: to.to_string(),
        },
        ("cpdir", [pre, rel, to]) => Action::CpDir {
            pre: pre.to_string(),
            rel: rel.to_string(),
            to: to.to_string(),
        },
        ("link", [pre, rel, to]) => Action::Link {
            pre: pre.to_string(),
            rel: rel.to_string(),
            to: to.to_string(),
        },
        ("unlink", [pre, rel, to]) => Action::Unlink {
            pre: pre.to_string(),
            rel: rel.to_string(),
            to: to.to_string(),
        },
        _ => return None,
    };
    Some(ops::dispatch(&action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_batch_is_a_noop_success() {
        let report = execute(&[], None, None);
        assert!(report.ok);
        assert!(report.inverse_log.is_empty());
    }

    #[test]
    fn noop_entries_are_skipped() {
        let report = execute(&[Action::Noop, Action::Noop], None, None);
        assert!(report.ok);
        assert!(report.inverse_log.is_empty());
        assert!(report.failed.is_empty());
    }

    #[test]
    fn mkpath_then_touch_composes_and_reverses() {
        let temp = TempDir::new().unwrap();
        let pre = temp.path().to_str().unwrap().to_string();

        let batch = vec![
            Action::mk_path(pre.clone(), "a/b"),
            Action::Touch {
                pre: pre.clone(),
                rel: "a/b/x.txt".to_string(),
            },
        ];
        let report = execute(&batch, None, None);
        assert!(report.ok);
        assert!(temp.path().join("a/b/x.txt").is_file());

        // reverse playback: rmfile then rmpath, undoing last effect first
        assert_eq!(report.inverse_log.len(), 2);
        assert_eq!(report.inverse_log[0], Action::rm_file(pre.clone(), "a/b/x.txt"));
        assert_eq!(report.inverse_log[1], Action::rm_path(pre.clone(), "a/b"));

        let undo = execute(&report.inverse_log, None, None);
        assert!(undo.ok);
        assert!(!temp.path().join("a/b/x.txt").exists());
        assert!(!temp.path().join("a/b").exists());
        assert!(!temp.path().join("a").exists());
    }

    #[test]
    fn failure_is_recorded_but_batch_continues() {
        let temp = TempDir::new().unwrap();
        let pre = temp.path().to_str().unwrap().to_string();

        let batch = vec![
            Action::rename(pre.clone(), "nope.txt", pre.clone(), "also-nope.txt"),
            Action::mk_path(pre.clone(), "ok-dir"),
        ];
        let report = execute(&batch, None, None);
        assert!(!report.ok);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].index, 0);
        assert_eq!(report.failed[0].code, ErrorCode::SrcInexist);
        assert!(temp.path().join("ok-dir").is_dir());
        // the failing rename contributed nothing to the inverse log
        assert_eq!(report.inverse_log, vec![Action::rm_path(pre, "ok-dir")]);
    }

    #[test]
    fn move_to_trash_back_patches_src_command() {
        let temp = TempDir::new().unwrap();
        let pre = temp.path().to_str().unwrap().to_string();
        fs::write(temp.path().join("a.txt"), "hi").unwrap();
        std::env::set_var(
            "DEV_FS_UNDO_TRASH_DIR",
            temp.path().join("trash-for-executor-test"),
        );

        let forward = vec![Action::MoveToTrash {
            pre: pre.clone(),
            rel: "a.txt".to_string(),
        }];
        let mut src_command = forward.clone();

        let report = execute(&forward, Some(&mut src_command), None);
        assert!(report.ok);
        assert!(!temp.path().join("a.txt").exists());

        // src_command[0] (index len-1-0 == 0) was rewritten with the
        // actual post-trash rename, replacing the original MoveToTrash.
        match &src_command[0] {
            Action::Rename { to_rel, .. } => {
                assert_eq!(to_rel, &temp.path().join("a.txt").to_string_lossy().into_owned());
            }
            other => panic!("expected back-patched Rename, got {other:?}"),
        }

        // replaying the back-patched entry restores the file
        let undo = execute(&src_command, None, None);
        assert!(undo.ok);
        assert!(temp.path().join("a.txt").exists());

        std::env::remove_var("DEV_FS_UNDO_TRASH_DIR");
    }

    #[test]
    fn cpdir_then_reverse_playback_restores_original_tree() {
        let temp = TempDir::new().unwrap();
        let pre = temp.path().to_str().unwrap().to_string();
        fs::create_dir_all(temp.path().join("a/a1")).unwrap();
        fs::write(temp.path().join("a/a1.txt"), "x").unwrap();
        fs::create_dir_all(temp.path().join("b")).unwrap();
        let to = temp.path().join("b").to_str().unwrap().to_string();

        let batch = vec![Action::CpDir {
            pre: pre.clone(),
            rel: "a".to_string(),
            to: to.clone(),
        }];
        let report = execute(&batch, None, None);
        assert!(report.ok);
        assert!(temp.path().join("b/a/a1.txt").is_file());

        let undo = execute(&report.inverse_log, None, None);
        assert!(undo.ok);
        assert!(!temp.path().join("b/a").exists());
        // source untouched throughout
        assert!(temp.path().join("a/a1.txt").is_file());
    }

    #[test]
    fn execute_logs_every_dispatched_action_to_the_audit_log() {
        let temp = TempDir::new().unwrap();
        let pre = temp.path().to_str().unwrap().to_string();
        let audit = AuditLog::new(temp.path().join("operations.jsonl"), true, 1024 * 1024);

        let batch = vec![
            Action::mk_path(pre.clone(), "a/b"),
            Action::rename(pre.clone(), "nope.txt", pre.clone(), "also-nope.txt"),
        ];
        let report = execute(&batch, None, Some(&audit));
        assert!(!report.ok);

        let records = audit.read_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].op, "mkpath");
        assert_eq!(records[0].result, "OK");
        assert_eq!(records[1].op, "rename");
        assert_eq!(records[1].result, "SRC_INEXIST");
    }

    #[test]
    fn dispatch_by_name_mirrors_enum_dispatch() {
        let temp = TempDir::new().unwrap();
        let pre = temp.path().to_str().unwrap();

        let (code, log) = dispatch_by_name("mkpath", &[pre, "fresh"]).unwrap();
        assert_eq!(code, ErrorCode::Ok);
        assert_eq!(log, vec![Action::mk_path(pre, "fresh")]);
        assert!(dispatch_by_name("unknownOp", &[pre, "fresh"]).is_none());
    }
}
