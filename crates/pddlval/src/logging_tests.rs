// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn default_filter_when_unset() {
    std::env::remove_var(env::PDDLVAL_LOG);
    assert_eq!(filter_directive(false), DEFAULT_FILTER);
}

#[test]
#[serial]
fn verbose_raises_level() {
    std::env::remove_var(env::PDDLVAL_LOG);
    assert_eq!(filter_directive(true), VERBOSE_FILTER);
}

#[test]
#[serial]
fn env_filter_overrides_verbose() {
    std::env::set_var(env::PDDLVAL_LOG, "pddlval=trace");
    let directive = filter_directive(true);
    std::env::remove_var(env::PDDLVAL_LOG);
    assert_eq!(directive, "pddlval=trace");
}

#[test]
#[serial]
fn init_twice_is_harmless() {
    std::env::remove_var(env::PDDLVAL_LOG);
    init(false);
    init(true);
}
