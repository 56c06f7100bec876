// SPDX-License-Identifier: MIT

//! The fixed launch settings.
//!
//! There is no configuration file; these values are compiled in.  The
//! structure exists so the launch sequence can be pointed at other names
//! under test.

use std::{ffi::OsString, path::{Path, PathBuf}};

/// Base name of the companion executable, without the platform suffix.
pub const COMPANION_STEM: &str = "Timelapse";

/// The flag that puts the companion into template editor mode.
pub const TEMPLATE_EDITOR_FLAG: &str = "-templateeditor";

/// Caption used on every notification the launcher raises.
pub const DISPLAY_NAME: &str = "Timelapse Template Editor";

/// What to launch, and how to announce problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// File name of the companion, expected next to the launcher.
    pub companion: OsString,
    /// The single argument handed to the companion.
    pub flag: OsString,
    /// Title for the notification dialogs.
    pub title: String,
}

impl LaunchConfig {
    /// The companion file name for the current platform, e.g. `Timelapse.exe` on Windows.
    pub fn companion_file_name() -> OsString {
        OsString::from(format!("{COMPANION_STEM}{}", std::env::consts::EXE_SUFFIX))
    }

    /// Where the companion is expected when the launcher lives in `launch_dir`.
    pub fn companion_path(&self, launch_dir: &Path) -> PathBuf {
        launch_dir.join(&self.companion)
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        LaunchConfig {
            companion: Self::companion_file_name(),
            flag: OsString::from(TEMPLATE_EDITOR_FLAG),
            title: DISPLAY_NAME.to_string(),
        }
    }
}
