// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for validation calls.
//!
//! Only infrastructure failures are errors. A checker that ran and rejected
//! its input is reported as `false` (or an `Invalid` verdict), never as an
//! error.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unsupported OS: {os}")]
    UnsupportedPlatform { os: String },

    #[error("Only 64-bit Windows is supported (found {bits}-bit)")]
    UnsupportedArchitecture { bits: u32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0} must be provided")]
    MissingInput(&'static str),

    #[error("At least one of domain, problem, or plan must be provided for validation")]
    InputRequired,

    #[error("Failed to run {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ValidationError {
    /// Whether the host or configuration rules out running any checker.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedPlatform { .. }
                | Self::UnsupportedArchitecture { .. }
                | Self::Config(_)
        )
    }

    /// Whether the caller supplied an inconsistent set of inputs.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingInput(_) | Self::InputRequired)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
