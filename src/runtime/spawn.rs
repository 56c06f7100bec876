// SPDX-License-Identifier: MIT

//! General model for starting the companion process and collecting its exit status.

use std::{ffi::OsString, path::{Path, PathBuf}};

use crate::config::LaunchConfig;
use crate::runtime::error::LaunchError;

/// Starts a process and blocks until it exits.
///
/// The platform implementations live in `spawn_windows` and `spawn_unix`;
/// tests substitute their own.
pub trait Spawn {
    fn spawn_and_wait(&self, request: &LaunchRequest) -> Result<ChildExit, LaunchError>;
}

impl<T: Spawn + ?Sized> Spawn for &T {
    fn spawn_and_wait(&self, request: &LaunchRequest) -> Result<ChildExit, LaunchError> {
        (**self).spawn_and_wait(request)
    }
}

/// How the child process ended, as far as the launcher can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// The child ran to completion with this exit code.
    Exited(i32),
    /// Process creation reported success but gave back no handle to wait on.
    NoHandle,
}

impl ChildExit {
    /// The code the launcher itself exits with.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChildExit::Exited(c) => *c,
            ChildExit::NoHandle => 0,
        }
    }
}

/// Describes how to launch the child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
}

impl LaunchRequest {
    /// The companion in `launch_dir`, given only the fixed flag, running in `launch_dir`.
    pub fn new(config: &LaunchConfig, launch_dir: &Path) -> Self {
        LaunchRequest {
            program: config.companion_path(launch_dir),
            args: vec![config.flag.clone()],
            cwd: launch_dir.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_launch_dir_for_program_and_cwd() {
        let config = LaunchConfig::default();
        let dir = PathBuf::from("some").join("install");
        let req = LaunchRequest::new(&config, &dir);
        assert_eq!(req.program, dir.join(&config.companion));
        assert_eq!(req.args, vec![OsString::from("-templateeditor")]);
        assert_eq!(req.cwd, dir);
    }

    #[test]
    fn no_handle_exits_zero() {
        assert_eq!(ChildExit::NoHandle.exit_code(), 0);
        assert_eq!(ChildExit::Exited(42).exit_code(), 42);
    }
}
