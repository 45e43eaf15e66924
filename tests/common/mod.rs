//! Shared integration test helpers for par-case.
//!
//! Include with `mod common;` at the top of a test file.

#![allow(dead_code)]

use par_case::{Config, Dispatcher, Encoding};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A dispatcher that defaults to UTF-8 and has no configured ignore list.
pub fn utf8_dispatcher() -> Dispatcher {
    Dispatcher::new(Encoding::Utf8)
}

/// Write `yaml` to a `config.yaml` inside a fresh temp dir.
///
/// The `TempDir` must be kept alive until all config I/O has completed.
pub fn config_file(yaml: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, yaml).expect("Failed to write config file");
    (path, temp_dir)
}

/// Load the config at `path` and build a dispatcher without consulting the
/// process environment.
pub fn dispatcher_from_file(path: &std::path::Path) -> Dispatcher {
    let config = Config::load_from(path).expect("config should load");
    Dispatcher::from_config_with(&config, |_| None).expect("encoding should be supported")
}
