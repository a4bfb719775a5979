// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output classification for the VAL tools.
//!
//! Neither tool has a trustworthy exit status, so validity is decided by
//! looking for known substrings in what they print. Those substrings are
//! tied to a particular VAL release and are kept in a [`MarkerTable`] that
//! can be overridden from configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checker::CheckerOutput;
use crate::error::{Result, ValidationError};

/// Identifier of the built-in marker table.
pub const DEFAULT_MARKERS_VERSION: &str = "val-4.1";

/// Printed by `Parser` when a domain (and problem) parse cleanly.
pub const GRAMMAR_SUCCESS: &str = "Errors: 0, warnings: 0";

/// Printed by `Validate` for an accepted plan.
pub const PLAN_SUCCESS: &str = "Plan valid";

/// Printed by `Validate` when a plan is rejected or cannot be read.
pub const PLAN_FAILURES: [&str; 4] = [
    "Error:",
    "Bad plan description!",
    "Failed plans:",
    "Bad operator in plan!",
];

/// Substrings used to classify checker output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerTable {
    /// Free-form tag naming the tool release these markers match.
    pub version: String,
    /// Must appear in `Parser` stdout for a pass.
    pub grammar_success: String,
    /// Marks an accepted plan anywhere in `Validate` output.
    pub plan_success: String,
    /// Any of these marks a rejected plan.
    pub plan_failure: Vec<String>,
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self {
            version: DEFAULT_MARKERS_VERSION.to_string(),
            grammar_success: GRAMMAR_SUCCESS.to_string(),
            plan_success: PLAN_SUCCESS.to_string(),
            plan_failure: PLAN_FAILURES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MarkerTable {
    /// Reject markers that would match any output.
    pub fn validate(&self) -> Result<()> {
        if self.grammar_success.is_empty() {
            return Err(empty_marker("grammar_success"));
        }
        if self.plan_success.is_empty() {
            return Err(empty_marker("plan_success"));
        }
        if self.plan_failure.iter().any(String::is_empty) {
            return Err(empty_marker("plan_failure"));
        }
        Ok(())
    }
}

fn empty_marker(field: &str) -> ValidationError {
    ValidationError::Config(format!("markers.{field} must not be empty"))
}

/// Why a checker run was judged invalid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reason {
    /// The grammar success marker was absent from stdout.
    MissingSuccessMarker,
    /// A plan failure marker was found.
    FailureMarker(String),
    /// No marker at all, but the process did not exit with status zero.
    AbnormalExit(Option<i32>),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSuccessMarker => write!(f, "no success marker in checker output"),
            Self::FailureMarker(marker) => write!(f, "checker reported {marker:?}"),
            Self::AbnormalExit(Some(code)) => write!(f, "checker exited with status {code}"),
            Self::AbnormalExit(None) => write!(f, "checker was terminated by a signal"),
        }
    }
}

/// Classified outcome of one checker run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(Reason),
    /// Plan output carried no known marker and the process exited cleanly.
    Indeterminate,
}

impl Verdict {
    /// Boolean contract: only `Valid` passes.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid(_) => "invalid",
            Self::Indeterminate => "indeterminate",
        }
    }

    pub fn reason(&self) -> Option<&Reason> {
        match self {
            Self::Invalid(reason) => Some(reason),
            Self::Valid | Self::Indeterminate => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(reason) => write!(f, "invalid ({reason})"),
            other => f.write_str(other.label()),
        }
    }
}

/// Classify `Parser` output. Only stdout is inspected and the exit status
/// is ignored, since `Parser` exits 0 even when it reports errors.
pub fn classify_grammar(output: &CheckerOutput, markers: &MarkerTable) -> Verdict {
    if output.stdout.contains(&markers.grammar_success) {
        Verdict::Valid
    } else {
        Verdict::Invalid(Reason::MissingSuccessMarker)
    }
}

/// Classify `Validate` output over stdout followed by stderr.
///
/// Precedence: success marker, then failure markers, then exit status.
pub fn classify_plan(output: &CheckerOutput, markers: &MarkerTable) -> Verdict {
    let text = output.combined();

    if text.contains(&markers.plan_success) {
        return Verdict::Valid;
    }
    if let Some(marker) = markers
        .plan_failure
        .iter()
        .find(|marker| text.contains(marker.as_str()))
    {
        return Verdict::Invalid(Reason::FailureMarker(marker.clone()));
    }
    if !output.exited_cleanly() {
        return Verdict::Invalid(Reason::AbnormalExit(output.exit_code));
    }
    Verdict::Indeterminate
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
