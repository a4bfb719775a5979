// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn unsupported_platform_names_the_os() {
    let err = ValidationError::UnsupportedPlatform {
        os: "freebsd".to_string(),
    };
    assert_eq!(err.to_string(), "Unsupported OS: freebsd");
}

#[test]
fn missing_input_names_the_field() {
    let err = ValidationError::MissingInput("Domain");
    assert_eq!(err.to_string(), "Domain must be provided");
}

#[test]
fn spawn_error_includes_program_path() {
    let err = ValidationError::Spawn {
        program: PathBuf::from("/opt/val/Parser"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    let msg = err.to_string();
    assert!(msg.contains("/opt/val/Parser"), "{msg}");
    assert!(msg.contains("no such file"), "{msg}");
}

#[test]
fn io_error_converts() {
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let err: ValidationError = io_err.into();
    assert!(matches!(err, ValidationError::Io(_)));
}

#[parameterized(
    platform = { ValidationError::UnsupportedPlatform { os: "aix".into() }, true, false },
    architecture = { ValidationError::UnsupportedArchitecture { bits: 32 }, true, false },
    config = { ValidationError::Config("bad".into()), true, false },
    missing = { ValidationError::MissingInput("Problem"), false, true },
    required = { ValidationError::InputRequired, false, true },
    io = { ValidationError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x")), false, false },
)]
fn taxonomy(err: ValidationError, config: bool, precondition: bool) {
    assert_eq!(err.is_config(), config);
    assert_eq!(err.is_precondition(), precondition);
}
