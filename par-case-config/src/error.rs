//! Errors raised while reading, writing or checking a par-case config file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of `Config::load_from`, `Config::save_to` or `Config::validate`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write config file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config file {} is not valid YAML", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The config could not be rendered back to YAML.
    #[error("cannot serialize config")]
    Serialize(#[from] serde_yaml_ng::Error),

    /// `default_encoding` is present but holds only whitespace.
    #[error("default_encoding must name an encoding, found a blank value")]
    BlankEncoding,

    /// `titleize_ignore` contains an empty string, which can never match a word.
    #[error("titleize_ignore entry {index} is empty")]
    EmptyIgnoreWord { index: usize },
}
