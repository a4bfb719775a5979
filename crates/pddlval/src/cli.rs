// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::env;
use crate::error::Result;
use crate::output::{write_report, Report};
use crate::request::ValidationRequest;
use crate::validator::{Outcome, Validator};

/// Process exit codes
pub mod exit_codes {
    /// Input is valid
    pub const VALID: i32 = 0;
    /// Checker ran and rejected the input
    pub const INVALID: i32 = 1;
    /// Checker could not be run, or arguments were inconsistent
    pub const ERROR: i32 = 2;
}

/// Validate PDDL domains, problems and plans with VAL
#[derive(Parser, Debug, Clone)]
#[command(name = "pddlval", version, about = "Validate PDDL domains, problems and plans with VAL")]
pub struct Cli {
    /// Domain file, or literal domain PDDL
    #[arg(value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Problem file, or literal problem PDDL
    #[arg(value_name = "PROBLEM")]
    pub problem: Option<String>,

    /// Plan file, or literal plan text
    #[arg(value_name = "PLAN")]
    pub plan: Option<String>,

    /// Configuration file (TOML, or JSON with a .json extension)
    #[arg(long, env = "PDDLVAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory containing the per-platform VAL binaries
    #[arg(long)]
    pub binaries_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Log checker invocations to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// The check implied by the positional arguments.
    pub fn request(&self) -> Result<ValidationRequest> {
        ValidationRequest::from_parts(
            self.domain.clone(),
            self.problem.clone(),
            self.plan.clone(),
        )
    }

    /// Resolve configuration: `--binaries-dir` over `PDDLVAL_BINARIES_DIR`
    /// over the config file over defaults.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(dir) = env::binaries_dir() {
            config.binaries_dir = Some(dir);
        }
        if let Some(ref dir) = self.binaries_dir {
            config.binaries_dir = Some(dir.clone());
        }
        Ok(config)
    }

    /// Run the requested check and write its report.
    pub fn execute<W: Write>(&self, writer: &mut W) -> Result<Outcome> {
        let request = self.request()?;
        let config = self.load_config()?;
        let validator = Validator::from_config(&config)?;

        let outcome = validator.check(&request)?;
        let report = Report::new(&outcome, &validator.markers().version);
        write_report(writer, &report, self.output_format)?;
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
