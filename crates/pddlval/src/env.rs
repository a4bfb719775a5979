// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by pddlval are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `PDDLVAL_CONFIG`: path to a TOML (or `.json`) configuration file.
pub fn config_path() -> Option<PathBuf> {
    var_path(names::PDDLVAL_CONFIG)
}

/// `PDDLVAL_BINARIES_DIR`: override for the directory holding the
/// per-platform `Parser`/`Validate` subdirectories.
pub fn binaries_dir() -> Option<PathBuf> {
    var_path(names::PDDLVAL_BINARIES_DIR)
}

/// `PDDLVAL_LOG`: tracing filter directive for the CLI.
pub fn log_filter() -> Option<String> {
    std::env::var(names::PDDLVAL_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

fn var_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
