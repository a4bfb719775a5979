// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn config_path_returns_none_when_unset() {
    std::env::remove_var(PDDLVAL_CONFIG);
    assert_eq!(config_path(), None);
}

#[test]
#[serial]
fn config_path_returns_path_when_set() {
    std::env::set_var(PDDLVAL_CONFIG, "/tmp/pddlval.toml");
    let result = config_path();
    std::env::remove_var(PDDLVAL_CONFIG);
    assert_eq!(result, Some(PathBuf::from("/tmp/pddlval.toml")));
}

#[test]
#[serial]
fn binaries_dir_returns_none_when_unset() {
    std::env::remove_var(PDDLVAL_BINARIES_DIR);
    assert_eq!(binaries_dir(), None);
}

#[test]
#[serial]
fn binaries_dir_ignores_empty_value() {
    std::env::set_var(PDDLVAL_BINARIES_DIR, "");
    let result = binaries_dir();
    std::env::remove_var(PDDLVAL_BINARIES_DIR);
    assert_eq!(result, None);
}

#[test]
#[serial]
fn binaries_dir_returns_path_when_set() {
    std::env::set_var(PDDLVAL_BINARIES_DIR, "/opt/val/binaries");
    let result = binaries_dir();
    std::env::remove_var(PDDLVAL_BINARIES_DIR);
    assert_eq!(result, Some(PathBuf::from("/opt/val/binaries")));
}

#[test]
#[serial]
fn log_filter_returns_directive_when_set() {
    std::env::set_var(PDDLVAL_LOG, "pddlval=debug");
    let result = log_filter();
    std::env::remove_var(PDDLVAL_LOG);
    assert_eq!(result.as_deref(), Some("pddlval=debug"));
}

#[test]
#[serial]
fn log_filter_ignores_blank_value() {
    std::env::set_var(PDDLVAL_LOG, "   ");
    let result = log_filter();
    std::env::remove_var(PDDLVAL_LOG);
    assert_eq!(result, None);
}
