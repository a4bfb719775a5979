// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation dispatcher.
//!
//! Every check follows the same steps: normalize inputs, run one checker,
//! classify its output, remove any temp files. Temp files are removed on
//! every exit path, including checker errors and panics.

use std::path::{Path, PathBuf};

use crate::checker::{Checker, CheckerOutput, ProcessChecker};
use crate::classify::{classify_grammar, classify_plan, MarkerTable, Verdict};
use crate::config::Config;
use crate::error::Result;
use crate::input::{self, PreparedInput};
use crate::platform::{Tool, ToolLocator};
use crate::request::{RequestKind, ValidationRequest};

/// Result of a single check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub kind: RequestKind,
    pub verdict: Verdict,
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }
}

/// Runs validation requests against a grammar checker and a plan checker.
pub struct Validator {
    parser: Box<dyn Checker>,
    plan_checker: Box<dyn Checker>,
    markers: MarkerTable,
    temp_dir: Option<PathBuf>,
}

impl Validator {
    /// Validator backed by the VAL executables for the host platform.
    ///
    /// Fails with a configuration error on unsupported hosts, before
    /// anything is written or spawned.
    pub fn from_config(config: &Config) -> Result<Self> {
        let locator = ToolLocator::for_host(config.resolved_binaries_dir())?;
        tracing::debug!(
            platform = %locator.platform(),
            dir = %locator.platform_dir().display(),
            markers = %config.markers.version,
            "resolved checker executables"
        );

        Ok(Self::with_checkers(
            ProcessChecker::new(locator.locate(Tool::Parser)),
            ProcessChecker::new(locator.locate(Tool::Validate)),
        )
        .with_markers(config.markers.clone())
        .with_temp_dir(config.temp_dir.clone()))
    }

    /// Validator configured from the environment (see [`Config::from_env`]).
    pub fn from_env() -> Result<Self> {
        Self::from_config(&Config::from_env()?)
    }

    /// Validator over arbitrary checkers, with the default markers.
    pub fn with_checkers(
        parser: impl Checker + 'static,
        plan_checker: impl Checker + 'static,
    ) -> Self {
        Self {
            parser: Box::new(parser),
            plan_checker: Box::new(plan_checker),
            markers: MarkerTable::default(),
            temp_dir: None,
        }
    }

    /// Set the marker table
    pub fn with_markers(mut self, markers: MarkerTable) -> Self {
        self.markers = markers;
        self
    }

    /// Set where literal content is written
    pub fn with_temp_dir(mut self, temp_dir: Option<PathBuf>) -> Self {
        self.temp_dir = temp_dir;
        self
    }

    pub fn markers(&self) -> &MarkerTable {
        &self.markers
    }

    /// Run `request` and return the classified outcome.
    pub fn check(&self, request: &ValidationRequest) -> Result<Outcome> {
        let kind = request.kind();
        let checker = match kind {
            RequestKind::Domain | RequestKind::Problem => self.parser.as_ref(),
            RequestKind::Plan => self.plan_checker.as_ref(),
        };

        let output = self.run_with_inputs(checker, &request.inputs())?;
        let verdict = match kind {
            RequestKind::Domain | RequestKind::Problem => {
                classify_grammar(&output, &self.markers)
            }
            RequestKind::Plan => classify_plan(&output, &self.markers),
        };

        match &verdict {
            Verdict::Indeterminate => tracing::warn!(
                %kind,
                markers = %self.markers.version,
                "checker output had no known marker; treating as invalid"
            ),
            _ => tracing::debug!(%kind, verdict = %verdict, "validation finished"),
        }

        Ok(Outcome { kind, verdict })
    }

    /// Run `request` and reduce the outcome to pass/fail.
    pub fn validate(&self, request: &ValidationRequest) -> Result<bool> {
        Ok(self.check(request)?.is_valid())
    }

    /// Grammar-check a domain (path or content).
    pub fn validate_domain(&self, domain: &str) -> Result<bool> {
        self.validate(&ValidationRequest::domain(domain))
    }

    /// Grammar-check a problem against its domain.
    pub fn validate_problem(&self, domain: &str, problem: &str) -> Result<bool> {
        self.validate(&ValidationRequest::problem(domain, problem))
    }

    /// Check that `plan` solves `problem` in `domain`.
    pub fn validate_plan(&self, domain: &str, problem: &str, plan: &str) -> Result<bool> {
        self.validate(&ValidationRequest::plan(domain, problem, plan))
    }

    fn run_with_inputs(&self, checker: &dyn Checker, args: &[&str]) -> Result<CheckerOutput> {
        let inputs = input::prepare_all(args, self.temp_dir.as_deref())?;
        let run = {
            let paths: Vec<&Path> = inputs.iter().map(PreparedInput::path).collect();
            checker.run(&paths)
        };

        // A checker error takes precedence over a cleanup error.
        let cleanup = input::cleanup_all(inputs);
        let output = run?;
        cleanup?;
        Ok(output)
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("markers", &self.markers)
            .field("temp_dir", &self.temp_dir)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
