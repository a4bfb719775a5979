// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path-or-content input normalization.
//!
//! Every checker argument may be either a path to an existing file or the
//! literal PDDL text. Literal text is written to a uniquely named `.pddl`
//! temp file so the external tools always receive a path.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempPath;

use crate::error::Result;

/// Suffix given to materialized content.
pub const TEMP_SUFFIX: &str = ".pddl";

const TEMP_PREFIX: &str = "pddlval-";

/// A checker argument resolved to a file on disk.
///
/// Temporary files are removed by [`PreparedInput::cleanup`]. If the value
/// is dropped instead (early return, panic) the file is still removed, but
/// any removal error is lost.
#[derive(Debug)]
pub struct PreparedInput {
    path: PathBuf,
    temp: Option<TempPath>,
}

impl PreparedInput {
    /// Resolve `arg` to a file path, writing it to a temp file unless it
    /// names an existing regular file.
    pub fn prepare(arg: &str, temp_dir: Option<&Path>) -> Result<Self> {
        let candidate = Path::new(arg);
        if candidate.is_file() {
            return Ok(Self {
                path: candidate.to_path_buf(),
                temp: None,
            });
        }

        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX).suffix(TEMP_SUFFIX);
        let mut file = match temp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(arg.as_bytes())?;
        file.flush()?;

        // Close our handle so the checker can open the file on every platform.
        let temp = file.into_temp_path();
        let path = temp.to_path_buf();
        tracing::debug!(path = %path.display(), bytes = arg.len(), "materialized input");

        Ok(Self {
            path,
            temp: Some(temp),
        })
    }

    /// Path to hand to the checker.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a temp file was created for this input.
    pub fn is_temporary(&self) -> bool {
        self.temp.is_some()
    }

    /// Remove the temp file, if any, reporting removal failures.
    pub fn cleanup(self) -> Result<()> {
        if let Some(temp) = self.temp {
            temp.close()?;
            tracing::debug!(path = %self.path.display(), "removed temp input");
        }
        Ok(())
    }
}

/// Prepare each argument in order.
///
/// On failure the inputs prepared so far are dropped, which removes their
/// temp files.
pub fn prepare_all(args: &[&str], temp_dir: Option<&Path>) -> Result<Vec<PreparedInput>> {
    args.iter()
        .map(|arg| PreparedInput::prepare(arg, temp_dir))
        .collect()
}

/// Clean up every input, returning the first failure after trying them all.
pub fn cleanup_all(inputs: Vec<PreparedInput>) -> Result<()> {
    let mut first_err = None;
    for input in inputs {
        if let Err(e) = input.cleanup() {
            first_err.get_or_insert(e);
        }
    }
    match first_err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
