//! The `Config` struct and its persistence.
//!
//! Covers:
//! - `load` / `load_from` / `save_to` (YAML file I/O with atomic write)
//! - XDG-style path helpers (`config_path`, `config_dir`)
//! - Default-encoding resolution (`EncodingSource`) across env var, config file and locale

use crate::error::ConfigError;
use crate::locale::{codeset_from_locale, locale_with};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides every other default-encoding source.
pub const ENCODING_ENV_VAR: &str = "PAR_CASE_ENCODING";

/// Encoding used when neither the environment nor the config file names one.
pub const FALLBACK_ENCODING: &str = "UTF-8";

/// User configuration for par-case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Encoding applied when a call does not name one.
    /// `None` defers to the process locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_encoding: Option<String>,

    /// Words `titleize` leaves untouched when the caller supplies no ignore list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub titleize_ignore: Vec<String>,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default encoding name
    pub fn with_default_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.default_encoding = Some(encoding.into());
        self
    }

    /// Set the fallback titleize ignore list
    pub fn with_titleize_ignore<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.titleize_ignore = words.into_iter().map(Into::into).collect();
        self
    }

    /// Load configuration from the default path, or defaults if it does not exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!("Config file not found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_yaml_ng::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let write_error = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Write to a sibling temp file, then rename over the target
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(write_error)?;
        fs::rename(&temp_path, path).map_err(write_error)?;

        Ok(())
    }

    /// Check field values that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(encoding) = &self.default_encoding
            && encoding.trim().is_empty()
        {
            return Err(ConfigError::BlankEncoding);
        }
        if let Some(index) = self.titleize_ignore.iter().position(|w| w.is_empty()) {
            return Err(ConfigError::EmptyIgnoreWord { index });
        }
        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("par-case")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("par-case")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Find where the default encoding comes from in the process environment.
    ///
    /// Precedence: `PAR_CASE_ENCODING`, then `default_encoding`, then the
    /// locale, then [`FALLBACK_ENCODING`].
    pub fn resolve_encoding_source(&self) -> EncodingSource {
        self.resolve_encoding_source_with(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::resolve_encoding_source`] with an injectable variable lookup.
    pub fn resolve_encoding_source_with<F>(&self, lookup: F) -> EncodingSource
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(ENCODING_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            log::debug!("Default encoding {name:?} taken from {ENCODING_ENV_VAR}");
            return EncodingSource::EnvVar(name.trim().to_string());
        }

        if let Some(name) = self.default_encoding.as_deref() {
            return EncodingSource::ConfigFile(name.trim().to_string());
        }

        match locale_with(&lookup) {
            Some(locale) => EncodingSource::Locale(locale),
            None => EncodingSource::Fallback,
        }
    }
}

/// Where the default encoding was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingSource {
    /// Named by `PAR_CASE_ENCODING`.
    EnvVar(String),
    /// Named by `default_encoding` in the config file.
    ConfigFile(String),
    /// Implied by a locale string such as `en_US.UTF-8`.
    Locale(String),
    /// Nothing named one.
    Fallback,
}

impl EncodingSource {
    /// Encoding name this source points at.
    ///
    /// A locale without a codeset resolves to [`FALLBACK_ENCODING`].
    pub fn encoding_name(&self) -> &str {
        match self {
            Self::EnvVar(name) | Self::ConfigFile(name) => name.as_str(),
            Self::Locale(locale) => codeset_from_locale(locale).unwrap_or(FALLBACK_ENCODING),
            Self::Fallback => FALLBACK_ENCODING,
        }
    }
}
