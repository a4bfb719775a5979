// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Filter used when `PDDLVAL_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter used for `--verbose`.
pub const VERBOSE_FILTER: &str = "pddlval=debug";

/// Pick the filter directive: `PDDLVAL_LOG` wins, then `--verbose`.
pub fn filter_directive(verbose: bool) -> String {
    match env::log_filter() {
        Some(filter) => filter,
        None if verbose => VERBOSE_FILTER.to_string(),
        None => DEFAULT_FILTER.to_string(),
    }
}

/// Install a stderr `fmt` subscriber. Does nothing if one is already set.
pub fn init(verbose: bool) {
    let directive = filter_directive(verbose);
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
