use std::fmt;

/// Outcome of a primitive filesystem operation.
///
/// `Ok` always means "the goal state holds" — either the call achieved it or
/// it already held. Every other variant means the call's preconditions
/// failed or the underlying OS call failed; see the primitive docs for which
/// of those two a given variant signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Ok,
    SrcPreDirInexist,
    SrcFileInexist,
    SrcDirInexist,
    SrcInexist,
    DstDirInexist,
    DstPreDirCannotMake,
    DstFolderAlreadyExist,
    DstFileAlreadyExist,
    DstFileOrPathAlreadyExist,
    CannotRemoveFile,
    CannotRemoveDir,
    CannotMakeLink,
    DstLinkInexist,
    CannotRemoveLink,
    UnknownError,
}

impl ErrorCode {
    pub fn is_ok(self) -> bool {
        matches!(self, ErrorCode::Ok)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::Ok => "OK",
            ErrorCode::SrcPreDirInexist => "SRC_PRE_DIR_INEXIST",
            ErrorCode::SrcFileInexist => "SRC_FILE_INEXIST",
            ErrorCode::SrcDirInexist => "SRC_DIR_INEXIST",
            ErrorCode::SrcInexist => "SRC_INEXIST",
            ErrorCode::DstDirInexist => "DST_DIR_INEXIST",
            ErrorCode::DstPreDirCannotMake => "DST_PRE_DIR_CANNOT_MAKE",
            ErrorCode::DstFolderAlreadyExist => "DST_FOLDER_ALREADY_EXIST",
            ErrorCode::DstFileAlreadyExist => "DST_FILE_ALREADY_EXIST",
            ErrorCode::DstFileOrPathAlreadyExist => "DST_FILE_OR_PATH_ALREADY_EXIST",
            ErrorCode::CannotRemoveFile => "CANNOT_REMOVE_FILE",
            ErrorCode::CannotRemoveDir => "CANNOT_REMOVE_DIR",
            ErrorCode::CannotMakeLink => "CANNOT_MAKE_LINK",
            ErrorCode::DstLinkInexist => "DST_LINK_INEXIST",
            ErrorCode::CannotRemoveLink => "CANNOT_REMOVE_LINK",
            ErrorCode::UnknownError => "UNKNOWN_ERROR",
        };
        f.write_str(s)
    }
}
