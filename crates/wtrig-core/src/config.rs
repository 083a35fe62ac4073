use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::workers::{builtin_workers, WorkerCatalog, WorkerDef, CUSTOM_WORKER_KEY};

/// Source URL the form starts with (and returns to on reset).
pub const DEFAULT_SOURCE_URL: &str = "https://api.eu-west-1.rentmanapp.com/4.806/api.php?account=staging133393&requestType=query&subject=Uren";

/// Worker selected when nothing else is chosen.
pub const DEFAULT_WORKER: &str = "create-notification-leave-request";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("worker entry {index} has an empty key")]
    EmptyWorkerKey { index: usize },
    #[error("worker key `{0}` is listed more than once")]
    DuplicateWorkerKey(String),
    #[error("worker key `custom` is reserved for the custom worker option")]
    ReservedWorkerKey,
    #[error("default_worker `{0}` is not in the worker list")]
    UnknownDefaultWorker(String),
}

/// Global configuration loaded from `~/.config/wtrig/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WtrigConfig {
    /// Source URL prefilled in the interactive form.
    #[serde(default = "default_source_url")]
    pub default_source_url: String,
    /// Worker key selected by default; `custom` starts with the free-text field.
    #[serde(default = "default_worker")]
    pub default_worker: String,
    /// Worker catalogue. Replaces the built-in list when present.
    #[serde(default = "builtin_workers")]
    pub workers: Vec<WorkerDef>,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_worker() -> String {
    DEFAULT_WORKER.to_string()
}

impl Default for WtrigConfig {
    fn default() -> Self {
        Self {
            default_source_url: default_source_url(),
            default_worker: default_worker(),
            workers: builtin_workers(),
        }
    }
}

impl WtrigConfig {
    /// Checks worker keys are non-empty, unique and not `custom`, and that
    /// `default_worker` names one of them (or `custom`).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, w) in self.workers.iter().enumerate() {
            let key = w.key.trim();
            if key.is_empty() {
                return Err(ConfigError::EmptyWorkerKey { index });
            }
            if key == CUSTOM_WORKER_KEY {
                return Err(ConfigError::ReservedWorkerKey);
            }
            if !seen.insert(key) {
                return Err(ConfigError::DuplicateWorkerKey(key.to_string()));
            }
        }
        if self.default_worker != CUSTOM_WORKER_KEY && !seen.contains(self.default_worker.as_str())
        {
            return Err(ConfigError::UnknownDefaultWorker(self.default_worker.clone()));
        }
        Ok(())
    }

    pub fn catalog(&self) -> WorkerCatalog {
        WorkerCatalog::new(self.workers.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wtrig")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WtrigConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<WtrigConfig> {
    if !path.exists() {
        let default_cfg = WtrigConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: WtrigConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = WtrigConfig::default();
        assert_eq!(cfg.default_source_url, DEFAULT_SOURCE_URL);
        assert_eq!(cfg.default_worker, "create-notification-leave-request");
        assert_eq!(cfg.workers.len(), 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = WtrigConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: WtrigConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: WtrigConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, WtrigConfig::default());
    }

    #[test]
    fn config_toml_custom_workers() {
        let toml = r#"
            default_worker = "sync-invoices"

            [[workers]]
            key = "sync-invoices"
            label = "Sync Invoices"

            [[workers]]
            key = "email"
            label = "Process Email Queue"
            description = "Processes email queue"
            icon = "✉️"
        "#;
        let cfg: WtrigConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_source_url, DEFAULT_SOURCE_URL);
        assert_eq!(cfg.workers.len(), 2);
        assert_eq!(cfg.workers[0].description, "");
        assert!(cfg.validate().is_ok());
        assert!(cfg.catalog().contains("sync-invoices"));
    }

    #[test]
    fn validate_rejects_duplicates() {
        let mut cfg = WtrigConfig::default();
        cfg.workers.push(WorkerDef::new("email", "Again", "", ""));
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::DuplicateWorkerKey("email".to_string()))
        );
    }

    #[test]
    fn validate_rejects_reserved_and_empty_keys() {
        let mut cfg = WtrigConfig::default();
        cfg.workers.push(WorkerDef::new("custom", "Custom", "", ""));
        assert_eq!(cfg.validate(), Err(ConfigError::ReservedWorkerKey));

        let mut cfg = WtrigConfig::default();
        cfg.workers.push(WorkerDef::new("  ", "Blank", "", ""));
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyWorkerKey { index: 3 }));
    }

    #[test]
    fn validate_default_worker() {
        let mut cfg = WtrigConfig::default();
        cfg.default_worker = "custom".to_string();
        assert!(cfg.validate().is_ok());
        cfg.default_worker = "missing".to_string();
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::UnknownDefaultWorker("missing".to_string()))
        );
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, WtrigConfig::default());

        fs::write(&path, "default_worker = \"email\"\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.default_worker, "email");
    }

    #[test]
    fn load_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_worker = \"missing\"\n").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing"));
    }
}
