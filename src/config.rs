//! Configuration for the engine's ambient stack: where the operation log
//! lives and how big it's allowed to get, and an override for the
//! `starred_path` default that the spec otherwise resolves once from the
//! environment.
//!
//! None of this is read by the primitives themselves — they take their
//! `starred_path` argument explicitly (see `crate::starred_path`). This
//! module exists so an embedder or a test can steer that default and the
//! audit log without environment variables. The trash root has no config
//! override: it's resolved solely from `$DEV_FS_UNDO_TRASH_DIR` (see
//! `trash::default_trash_root`), since the primitive-dispatch path
//! (`ops::dispatch`/`executor::execute`) never threads a `Config` down to
//! `move_to_trash`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Overrides the resolved `$HOME/Documents` default for shortcut
    /// targets (`ops::link`/`ops::unlink`).
    #[serde(default)]
    pub starred_path: Option<PathBuf>,

    /// Operation log settings.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starred_path: None,
            audit: AuditConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_audit_max_size_mb")]
    pub max_size_mb: u64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
            max_size_mb: default_audit_max_size_mb(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_audit_max_size_mb() -> u64 {
    5
}

impl Config {
    /// Loads config from `path`, or falls back to defaults if it doesn't
    /// exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read config file: {}", path.as_ref().display()))?;
        toml::from_str(&content).with_context(|| "failed to parse config file")
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "failed to serialize config")?;
        fs::write(path.as_ref(), content)
            .with_context(|| format!("failed to write config file: {}", path.as_ref().display()))
    }

    /// Default config path: `<config dir>/revertible-fs/config.toml`.
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("revertible-fs").join("config.toml")
        } else {
            PathBuf::from(".revertible-fs.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_or_default(temp.path().join("nope.toml")).unwrap();
        assert!(config.starred_path.is_none());
        assert!(config.audit.enabled);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        let config = Config {
            starred_path: Some(temp.path().join("Documents")),
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.starred_path, Some(temp.path().join("Documents")));
        assert_eq!(loaded.audit.max_size_mb, 5);
    }
}
