//! Shortcut capability: creates/removes a platform shortcut file.
//!
//! Shortcut-link creation is delegated to the OS per the engine's scope —
//! this module is that thin platform seam, not a general symlink API. A
//! "shortcut" here is a `.lnk`-suffixed entry (see `ops::link`) backed by
//! a native symlink, not Windows Shell Link (`.lnk`) binary format; the
//! suffix is what the spec calls out, the underlying mechanism is
//! whatever the platform offers for "point at this other path."

use anyhow::{Context, Result};
use std::path::Path;

/// Creates a shortcut at `link` pointing at `source`.
#[cfg(unix)]
pub fn make_link(source: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(source, link).with_context(|| {
        format!(
            "failed to create shortcut: {} -> {}",
            link.display(),
            source.display()
        )
    })
}

#[cfg(windows)]
pub fn make_link(source: &Path, link: &Path) -> Result<()> {
    let source_is_dir = std::fs::symlink_metadata(source)
        .map(|m| m.is_dir())
        .unwrap_or(false);
    let result = if source_is_dir {
        std::os::windows::fs::symlink_dir(source, link)
    } else {
        std::os::windows::fs::symlink_file(source, link)
    };
    result.with_context(|| {
        format!(
            "failed to create shortcut: {} -> {}",
            link.display(),
            source.display()
        )
    })
}

/// Removes a shortcut at `link`.
#[cfg(unix)]
pub fn remove_link(link: &Path) -> Result<()> {
    std::fs::remove_file(link)
        .with_context(|| format!("failed to remove shortcut: {}", link.display()))
}

#[cfg(windows)]
pub fn remove_link(link: &Path) -> Result<()> {
    let meta = std::fs::symlink_metadata(link)
        .with_context(|| format!("failed to stat shortcut: {}", link.display()))?;
    let result = if meta.is_dir() {
        std::fs::remove_dir(link)
    } else {
        std::fs::remove_file(link)
    };
    result.with_context(|| format!("failed to remove shortcut: {}", link.display()))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn creates_and_removes_file_shortcut() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("a.txt");
        fs::write(&source, "hi").unwrap();
        let link = temp.path().join("a.txt.lnk");

        make_link(&source, &link).unwrap();
        assert_eq!(fs::read_link(&link).unwrap(), source);
        assert_eq!(fs::read_to_string(&link).unwrap(), "hi");

        remove_link(&link).unwrap();
        assert!(!link.exists());
        assert!(source.exists());
    }

    #[test]
    fn creates_dir_shortcut() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("a");
        fs::create_dir_all(source.join("child")).unwrap();
        let link = temp.path().join("a.lnk");

        make_link(&source, &link).unwrap();
        assert!(link.join("child").is_dir());

        remove_link(&link).unwrap();
        assert!(!link.exists());
        assert!(source.exists());
    }
}
