// SPDX-License-Identifier: MIT

//! Common error type.
//!
//! There are exactly two ways a launch can fail, and both end the launcher
//! with exit code 1 after the user has been told.

use std::{fmt::Display, path::{Path, PathBuf}};

/// Exit code used for every launcher-side failure.
pub const FAILURE_EXIT_CODE: i32 = 1;

#[derive(Debug)]
pub enum LaunchError {
    /// The companion executable is not next to the launcher.
    CompanionMissing { path: PathBuf },
    /// The OS refused to start the companion.
    LaunchFailed {
        path: PathBuf,
        code: u32,
        reason: String,
    },
}

impl LaunchError {
    pub fn missing(path: &Path) -> Self {
        LaunchError::CompanionMissing { path: path.to_path_buf() }
    }

    pub fn failed(path: &Path, code: u32, reason: impl Into<String>) -> Self {
        LaunchError::LaunchFailed {
            path: path.to_path_buf(),
            code,
            reason: reason.into(),
        }
    }

    /// Wrap an I/O error raised while starting `path`.
    /// Errors without an OS code are reported with code 0.
    pub fn from_io(path: &Path, e: std::io::Error) -> Self {
        let code = e.raw_os_error().map(|c| c as u32).unwrap_or(0);
        LaunchError::failed(path, code, e.to_string())
    }

    /// The platform error code, if this is a launch failure.
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::CompanionMissing { .. } => None,
            Self::LaunchFailed { code, .. } => Some(*code),
        }
    }

    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }

    /// The text shown to the user.
    pub fn message(&self) -> String {
        match self {
            Self::CompanionMissing { path } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.to_string_lossy().to_string());
                let dir = path
                    .parent()
                    .map(|d| d.to_string_lossy().to_string())
                    .unwrap_or_default();
                format!("Could not find {name} in {dir}.")
            }
            Self::LaunchFailed { path, code, reason } => format!(
                "Could not launch {}. Error code {code}: {}",
                path.to_string_lossy(),
                reason.trim_end(),
            ),
        }
    }
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for LaunchError {}
