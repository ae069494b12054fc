// File: src/config.rs
use crate::core::types::Style;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "HUMANIZE_CONFIG";
const APP_DIR: &str = "humanize-indo";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the binary lexicon snapshot lives.
    pub lexicon_path: PathBuf,
    /// Fall back to the built-in lexicon when the snapshot is missing.
    pub seed_if_missing: bool,
    /// Filter used when `HUMANIZE_LOG` is not set.
    pub log_level: String,
    /// Forces a style instead of detecting one.
    pub default_style: Option<Style>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon_path: default_lexicon_path(),
            seed_if_missing: true,
            log_level: "info".to_string(),
            default_style: None,
        }
    }
}

fn default_lexicon_path() -> PathBuf {
    match dirs::config_dir() {
        Some(mut path) => {
            path.push(APP_DIR);
            path.push("lexicon.bin");
            path
        }
        None => PathBuf::from("lexicon.bin"),
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

impl Config {
    /// Resolution order: `explicit`, then `$HUMANIZE_CONFIG`, then the user
    /// config file if it exists, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }
        match user_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }
}
