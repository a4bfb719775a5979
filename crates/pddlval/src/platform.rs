// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host platform detection and checker executable lookup.
//!
//! Executables live at `<binaries_dir>/<platform>/<tool>[.exe]`, where
//! `binaries_dir` defaults to the `binaries` directory shipped next to this
//! crate's manifest.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, ValidationError};

/// Platforms VAL binaries are published for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    /// Detect the platform this process runs on.
    pub fn detect() -> Result<Self> {
        Self::from_host(std::env::consts::OS, usize::BITS)
    }

    /// Map an OS identifier (as in `std::env::consts::OS`) and pointer width
    /// to a supported platform.
    pub fn from_host(os: &str, pointer_bits: u32) -> Result<Self> {
        match os {
            "windows" if pointer_bits != 64 => {
                Err(ValidationError::UnsupportedArchitecture { bits: pointer_bits })
            }
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            "macos" => Ok(Self::MacOs),
            other => Err(ValidationError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }

    /// Subdirectory of the binaries dir holding this platform's tools.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::MacOs => "macos",
        }
    }

    /// Executable file extension, including the dot.
    pub fn exe_suffix(self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::Linux | Self::MacOs => "",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// The two VAL executables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Grammar checker for domains and problems.
    Parser,
    /// Plan checker.
    Validate,
}

impl Tool {
    /// Base name of the executable, without extension.
    pub fn stem(self) -> &'static str {
        match self {
            Self::Parser => "Parser",
            Self::Validate => "Validate",
        }
    }

    /// File name of the executable on `platform`.
    pub fn executable_name(self, platform: Platform) -> String {
        format!("{}{}", self.stem(), platform.exe_suffix())
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// `binaries` directory next to this crate's manifest.
pub fn default_binaries_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("binaries")
}

/// Resolves tool paths for one platform.
#[derive(Clone, Debug)]
pub struct ToolLocator {
    binaries_dir: PathBuf,
    platform: Platform,
}

impl ToolLocator {
    pub fn new(binaries_dir: impl Into<PathBuf>, platform: Platform) -> Self {
        Self {
            binaries_dir: binaries_dir.into(),
            platform,
        }
    }

    /// Locator for the host platform. Fails on unsupported hosts.
    pub fn for_host(binaries_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(binaries_dir, Platform::detect()?))
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Directory holding this platform's executables.
    pub fn platform_dir(&self) -> PathBuf {
        self.binaries_dir.join(self.platform.dir_name())
    }

    /// Path to `tool`. Existence is not checked; a missing executable
    /// surfaces as a spawn error when it is run.
    pub fn locate(&self, tool: Tool) -> PathBuf {
        self.platform_dir().join(tool.executable_name(self.platform))
    }
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
