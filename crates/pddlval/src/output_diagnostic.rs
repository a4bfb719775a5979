// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stderr diagnostics for the CLI, colored when stderr is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }

    /// ANSI foreground color code
    fn color(self) -> u8 {
        match self {
            Self::Error => 31,
            Self::Warning => 33,
        }
    }
}

/// Print an error (red on a terminal) to stderr.
pub fn print_error(msg: impl Display) {
    emit(Severity::Error, msg);
}

/// Print a warning (yellow on a terminal) to stderr.
pub fn print_warning(msg: impl Display) {
    emit(Severity::Warning, msg);
}

fn emit(severity: Severity, msg: impl Display) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    write_diagnostic(&mut stderr.lock(), severity, msg, is_tty);
}

fn write_diagnostic<W: Write>(
    writer: &mut W,
    severity: Severity,
    msg: impl Display,
    color: bool,
) {
    let label = severity.label();
    let _ = if color {
        writeln!(writer, "\x1b[{}m{label}: {msg}\x1b[0m", severity.color())
    } else {
        writeln!(writer, "{label}: {msg}")
    };
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
