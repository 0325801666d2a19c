//! `move_to_trash` — the one primitive whose inverse path isn't knowable
//! until the call returns, since the trash capability allocates it.

use crate::action::{Action, InverseLog};
use crate::error::ErrorCode;
use crate::paths;
use crate::trash;
use std::path::Path;

/// Moves `pre/rel` into the default trash root.
///
/// Missing source is a no-op success. On success the inverse is a `rename`
/// from the allocated trash path back to the original absolute path — the
/// executor back-patches this entry's `rel` once the batch as a whole is
/// known, since a caller composing several trash calls up front can't
/// predict where each one lands.
pub fn move_to_trash(pre: &str, rel: &str) -> (ErrorCode, InverseLog) {
    move_to_trash_under(pre, rel, &trash::default_trash_root())
}

pub fn move_to_trash_under(pre: &str, rel: &str, trash_root: &Path) -> (ErrorCode, InverseLog) {
    let path = paths::absolute(pre, rel);
    if !path.exists() {
        return (ErrorCode::Ok, Vec::new());
    }

    match trash::move_to_trash_under(trash_root, &path) {
        Ok(trashed) => {
            let trashed_str = trashed.to_string_lossy().into_owned();
            let original_str = path.to_string_lossy().into_owned();
            (ErrorCode::Ok, vec![Action::rename("", trashed_str, "", original_str)])
        }
        Err(_) => (ErrorCode::UnknownError, Vec::new()),
    }
}
