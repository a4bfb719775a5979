// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PDDL validation through the VAL tools.
//!
//! Runs VAL's `Parser` on domains and problems and `Validate` on plans,
//! reducing their output to pass/fail. Every input may be a path to an
//! existing file or the literal PDDL text.
//!
#![doc = include_str!("../README.md")]

pub mod checker;
pub mod classify;
pub mod config;
pub mod env;
pub mod error;
pub mod input;
pub mod platform;
pub mod request;
pub mod validator;

#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod logging;
#[doc(hidden)]
pub mod output;
#[doc(hidden)]
pub mod output_diagnostic;

pub use checker::{Checker, CheckerOutput, ProcessChecker};
pub use classify::{MarkerTable, Reason, Verdict};
pub use config::Config;
pub use error::{Result, ValidationError};
pub use platform::{Platform, Tool, ToolLocator};
pub use request::{RequestKind, ValidationRequest};
pub use validator::{Outcome, Validator};

/// Grammar-check a domain using the host's VAL `Parser`.
pub fn validate_domain(domain: &str) -> Result<bool> {
    Validator::from_env()?.validate_domain(domain)
}

/// Grammar-check a problem against its domain using the host's VAL `Parser`.
pub fn validate_problem(domain: &str, problem: &str) -> Result<bool> {
    Validator::from_env()?.validate_problem(domain, problem)
}

/// Check a plan against its domain and problem using the host's VAL
/// `Validate`.
pub fn validate_plan(domain: &str, problem: &str, plan: &str) -> Result<bool> {
    Validator::from_env()?.validate_plan(domain, problem, plan)
}

/// Run whichever check `request` describes.
pub fn validate(request: &ValidationRequest) -> Result<bool> {
    Validator::from_env()?.validate(request)
}

/// Run the most specific check the given inputs allow.
///
/// A plan requires a domain and a problem; a problem requires a domain.
/// Inconsistent or empty combinations are rejected before anything runs.
pub fn validate_parts(
    domain: Option<&str>,
    problem: Option<&str>,
    plan: Option<&str>,
) -> Result<bool> {
    let request = ValidationRequest::from_parts(
        domain.map(str::to_owned),
        problem.map(str::to_owned),
        plan.map(str::to_owned),
    )?;
    validate(&request)
}
