// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation requests.
//!
//! Each variant carries exactly the inputs its check needs, so a plan can
//! never be submitted without its domain and problem.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, ValidationError};

/// Which check a request runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Domain,
    Problem,
    Plan,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain => write!(f, "domain"),
            Self::Problem => write!(f, "problem"),
            Self::Plan => write!(f, "plan"),
        }
    }
}

/// A validation to perform. Inputs are paths or literal content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationRequest {
    /// Grammar-check a domain.
    Domain { domain: String },
    /// Grammar-check a problem against its domain.
    Problem { domain: String, problem: String },
    /// Check that a plan solves a problem.
    Plan {
        domain: String,
        problem: String,
        plan: String,
    },
}

impl ValidationRequest {
    pub fn domain(domain: impl Into<String>) -> Self {
        Self::Domain {
            domain: domain.into(),
        }
    }

    pub fn problem(domain: impl Into<String>, problem: impl Into<String>) -> Self {
        Self::Problem {
            domain: domain.into(),
            problem: problem.into(),
        }
    }

    pub fn plan(
        domain: impl Into<String>,
        problem: impl Into<String>,
        plan: impl Into<String>,
    ) -> Self {
        Self::Plan {
            domain: domain.into(),
            problem: problem.into(),
            plan: plan.into(),
        }
    }

    /// Build a request from whichever inputs are present.
    ///
    /// The most specific non-empty input decides the check. A plan then
    /// needs a domain and problem, a problem needs a domain; those may be
    /// empty but not absent.
    pub fn from_parts(
        domain: Option<String>,
        problem: Option<String>,
        plan: Option<String>,
    ) -> Result<Self> {
        if let Some(plan) = plan.filter(|s| !s.is_empty()) {
            let domain = domain.ok_or(ValidationError::MissingInput("Domain"))?;
            let problem = problem.ok_or(ValidationError::MissingInput("Problem"))?;
            return Ok(Self::plan(domain, problem, plan));
        }
        if let Some(problem) = problem.filter(|s| !s.is_empty()) {
            let domain = domain.ok_or(ValidationError::MissingInput("Domain"))?;
            return Ok(Self::problem(domain, problem));
        }
        match domain.filter(|s| !s.is_empty()) {
            Some(domain) => Ok(Self::domain(domain)),
            None => Err(ValidationError::InputRequired),
        }
    }

    pub fn kind(&self) -> RequestKind {
        match self {
            Self::Domain { .. } => RequestKind::Domain,
            Self::Problem { .. } => RequestKind::Problem,
            Self::Plan { .. } => RequestKind::Plan,
        }
    }

    /// Inputs in the order the checker expects them.
    pub fn inputs(&self) -> Vec<&str> {
        match self {
            Self::Domain { domain } => vec![domain.as_str()],
            Self::Problem { domain, problem } => vec![domain.as_str(), problem.as_str()],
            Self::Plan {
                domain,
                problem,
                plan,
            } => vec![domain.as_str(), problem.as_str(), plan.as_str()],
        }
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
