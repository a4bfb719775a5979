// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The external checker seam.
//!
//! [`ProcessChecker`] runs a VAL executable. Tests substitute their own
//! [`Checker`] implementations.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Result, ValidationError};

/// Captured result of one checker run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckerOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CheckerOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code: Some(exit_code),
        }
    }

    /// Whether the process exited with status zero.
    pub fn exited_cleanly(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Standard output followed by standard error.
    pub fn combined(&self) -> String {
        let mut text = String::with_capacity(self.stdout.len() + self.stderr.len());
        text.push_str(&self.stdout);
        text.push_str(&self.stderr);
        text
    }
}

/// Something that can check a set of files and report its output.
pub trait Checker: Send + Sync {
    /// Run once over `args` and block until it finishes.
    fn run(&self, args: &[&Path]) -> Result<CheckerOutput>;
}

/// Runs an executable as a subprocess, capturing stdout and stderr.
#[derive(Clone, Debug)]
pub struct ProcessChecker {
    program: PathBuf,
}

impl ProcessChecker {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Checker for ProcessChecker {
    fn run(&self, args: &[&Path]) -> Result<CheckerOutput> {
        tracing::debug!(program = %self.program.display(), ?args, "running checker");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ValidationError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let result = CheckerOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };
        tracing::debug!(
            program = %self.program.display(),
            exit_code = ?result.exit_code,
            stdout_bytes = result.stdout.len(),
            stderr_bytes = result.stderr.len(),
            "checker finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
