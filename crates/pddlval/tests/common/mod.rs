// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for integration tests.
//!
//! Provides a fake VAL install: shell scripts named `Parser` and `Validate`
//! that mimic the real tools' output closely enough for classification.
//! The fake `Parser` only checks parenthesis balance; the fake `Validate`
//! checks operator names against the domain's `(:action ...)` list.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Mimics `Parser <domain> [<problem>]`: always exits 0, reports an error
/// count on stdout.
pub const FAKE_PARSER: &str = r#"#!/bin/sh
errors=0
for f in "$@"; do
  open=$(tr -cd '(' < "$f" | wc -c | tr -d ' ')
  close=$(tr -cd ')' < "$f" | wc -c | tr -d ' ')
  if [ "$open" -ne "$close" ]; then
    echo "$f: line: 1: Error: Syntax error in domain"
    errors=$((errors + 1))
  fi
done
echo "Errors: $errors, warnings: 0"
"#;

/// Mimics `Validate <domain> <problem> <plan>`.
pub const FAKE_VALIDATE: &str = r#"#!/bin/sh
for f in "$1" "$2"; do
  open=$(tr -cd '(' < "$f" | wc -c | tr -d ' ')
  close=$(tr -cd ')' < "$f" | wc -c | tr -d ' ')
  if [ "$open" -ne "$close" ]; then
    echo "Error: Parser failed to read file!" >&2
    exit 255
  fi
done
if grep -q 'crash' "$3"; then
  echo "Segmentation fault" >&2
  exit 139
fi
if grep -q 'mute' "$3"; then
  exit 0
fi
actions=" $(sed -n 's/.*(:action[[:space:]]*\([^[:space:]()]*\).*/\1/p' "$1" | tr '\n' ' ') "
steps=0
for op in $(sed -n 's/^[^;(]*(\([^[:space:]()]*\).*/\1/p' "$3"); do
  case "$actions" in
    *" $op "*) steps=$((steps + 1)) ;;
    *) echo "Bad operator in plan!"; exit 0 ;;
  esac
done
echo "Checking plan: $3"
if [ "$steps" -eq 0 ]; then
  echo "Plan executed successfully - checking goal"
  echo "Goal not satisfied"
  echo "Plan invalid"
  echo "Failed plans:"
  echo " $3"
  exit 0
fi
echo "Plan executed successfully - checking goal"
echo "Plan valid"
echo "Final value: $steps"
"#;

/// Platform directory name for the host.
pub fn platform_dir() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}

/// Create `<root>/binaries/<platform>/{Parser,Validate}` as executable
/// shell scripts and return the root. The binaries dir is
/// `root.path().join("binaries")`.
#[cfg(unix)]
pub fn fake_val_install() -> TempDir {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("binaries").join(platform_dir());
    fs::create_dir_all(&dir).unwrap();
    write_executable(&dir.join("Parser"), FAKE_PARSER);
    write_executable(&dir.join("Validate"), FAKE_VALIDATE);
    root
}

#[cfg(unix)]
fn write_executable(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, body).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

/// Root of the checked-in PDDL fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Fixture files in `subdir` whose names start with `prefix`.
pub fn fixtures(subdir: &str, prefix: &str) -> Vec<PathBuf> {
    let pattern = fixtures_dir().join(subdir).join(format!("{prefix}*"));
    let mut paths: Vec<PathBuf> = glob::glob(pattern.to_str().unwrap())
        .unwrap()
        .map(Result::unwrap)
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixtures match {}", pattern.display());
    paths
}

/// Both forms an input can take: its path, and its literal content.
pub fn path_and_content(path: &Path) -> [String; 2] {
    [
        path.to_str().unwrap().to_string(),
        fs::read_to_string(path).unwrap(),
    ]
}

/// Write a config file under `root` pointing at its fake binaries and
/// at `scratch` for materialized content.
pub fn write_config(root: &TempDir, scratch: &TempDir) -> PathBuf {
    let path = root.path().join("pddlval.toml");
    fs::write(
        &path,
        format!(
            "binaries_dir = {:?}\ntemp_dir = {:?}\n",
            root.path().join("binaries"),
            scratch.path()
        ),
    )
    .unwrap();
    path
}

/// Number of entries left in `dir`.
pub fn residue(dir: &TempDir) -> usize {
    fs::read_dir(dir.path()).unwrap().count()
}
