// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pddlval binary entry point.

use std::io::Write;

use clap::Parser;

use pddlval::cli::{exit_codes, Cli};
use pddlval::logging;
use pddlval::output_diagnostic::{print_error, print_warning};
use pddlval::Verdict;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    let code = match cli.execute(&mut stdout) {
        Ok(outcome) => {
            if outcome.verdict == Verdict::Indeterminate {
                print_warning(format_args!(
                    "{} check produced no recognizable result; reporting invalid",
                    outcome.kind
                ));
            }
            if outcome.is_valid() {
                exit_codes::VALID
            } else {
                exit_codes::INVALID
            }
        }
        Err(e) => {
            print_error(e);
            exit_codes::ERROR
        }
    };
    let _ = stdout.flush();
    drop(stdout);
    std::process::exit(code);
}
