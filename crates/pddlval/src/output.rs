// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI validation reports.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::request::RequestKind;
use crate::validator::Outcome;

/// Machine-readable summary of one validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub kind: RequestKind,
    pub valid: bool,
    pub verdict: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Marker table version used for classification
    pub markers: String,
}

impl Report {
    pub fn new(outcome: &Outcome, markers_version: &str) -> Self {
        Self {
            kind: outcome.kind,
            valid: outcome.is_valid(),
            verdict: outcome.verdict.label(),
            reason: outcome.verdict.reason().map(ToString::to_string),
            markers: markers_version.to_string(),
        }
    }
}

/// Write a report in the requested format, newline-terminated.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &Report,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => match &report.reason {
            Some(reason) => writeln!(writer, "{}: {} ({})", report.kind, report.verdict, reason),
            None => writeln!(writer, "{}: {}", report.kind, report.verdict),
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, report)?;
            writeln!(writer)
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
