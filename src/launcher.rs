// SPDX-License-Identifier: MIT

//! The launch sequence.
//!
//! Resolve the launcher's own directory, find the companion next to it,
//! start it with the template editor flag, wait, and hand back the exit code
//! the launcher should end with.  Failures are shown to the user through a
//! `Notify` and turn into exit code 1.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::{
    config::LaunchConfig,
    notify::{Notify, PlatformNotifier},
    runtime::{ChildExit, LaunchRequest, PlatformSpawner, Spawn, error::LaunchError},
};

/// The directory containing the launcher executable.
pub fn launch_dir(self_exe: &Path) -> PathBuf {
    self_exe.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// Where the companion is expected, given the launcher's directory.
pub fn target_path(launch_dir: &Path, config: &LaunchConfig) -> PathBuf {
    config.companion_path(launch_dir)
}

/// Runs the launch sequence with a given spawner and notifier.
pub struct Launcher<S, N> {
    config: LaunchConfig,
    spawner: S,
    notifier: N,
}

impl<S: Spawn, N: Notify> Launcher<S, N> {
    /// A launcher for `config`, starting processes with `spawner` and reporting through `notifier`.
    pub fn new(config: LaunchConfig, spawner: S, notifier: N) -> Self {
        Launcher { config, spawner, notifier }
    }

    /// Start the companion beside `self_exe` and wait for it.
    /// Does not notify; see `run`.
    pub fn launch(&self, self_exe: &Path) -> Result<ChildExit, LaunchError> {
        let dir = launch_dir(self_exe);
        let request = LaunchRequest::new(&self.config, &dir);
        debug!(
            launcher = %self_exe.display(),
            companion = %request.program.display(),
            "resolved companion",
        );

        if !request.program.exists() {
            return Err(LaunchError::missing(&request.program));
        }
        self.spawner.spawn_and_wait(&request)
    }

    /// Run the whole sequence and return the exit code for the launcher.
    pub fn run(&self, self_exe: &Path) -> i32 {
        match self.launch(self_exe) {
            Ok(exit) => {
                if exit == ChildExit::NoHandle {
                    info!("companion started without a process handle");
                } else {
                    info!(code = exit.exit_code(), "companion exited");
                }
                exit.exit_code()
            }
            Err(e) => self.report(e),
        }
    }

    /// Run against the path of the running executable.
    pub fn run_current(&self) -> i32 {
        match std::env::current_exe() {
            Ok(exe) => self.run(&exe),
            Err(e) => {
                let companion = PathBuf::from(&self.config.companion);
                self.report(LaunchError::from_io(&companion, e))
            }
        }
    }

    fn report(&self, e: LaunchError) -> i32 {
        error!(code = ?e.code(), "{e}");
        self.notifier.error(&self.config.title, &e.message());
        e.exit_code()
    }
}

/// Launch the default companion with the platform spawner and notifier.
pub fn run_from_current_exe() -> i32 {
    Launcher::new(LaunchConfig::default(), PlatformSpawner, PlatformNotifier::default())
        .run_current()
}
