//! Configuration system for the par-case string transformation library.
//!
//! This crate owns everything that depends on the process environment:
//!
//! - The YAML configuration file (`~/.config/par-case/config.yaml`)
//! - The `PAR_CASE_ENCODING` override
//! - Locale probing (`LC_ALL`, `LC_CTYPE`, `LANG`) for the default encoding
//!
//! The transformation crate itself stays pure and receives the resolved
//! encoding name from here.

pub mod config;
pub mod error;
pub mod locale;

// Re-export main types for convenience
pub use config::{Config, ENCODING_ENV_VAR, EncodingSource, FALLBACK_ENCODING};
pub use error::ConfigError;
pub use locale::{codeset_from_locale, locale_with};
