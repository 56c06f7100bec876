// SPDX-License-Identifier: MIT

//! Process launching for Unix-like systems, through `std::process::Command`.

use std::{os::unix::process::ExitStatusExt, process::{Command, ExitStatus}};

use tracing::debug;

use crate::runtime::{
    error::{FAILURE_EXIT_CODE, LaunchError},
    spawn::{ChildExit, LaunchRequest, Spawn},
};

/// Launches with `fork`/`exec`, inheriting the environment and standard streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnixSpawner;

impl Spawn for UnixSpawner {
    fn spawn_and_wait(&self, request: &LaunchRequest) -> Result<ChildExit, LaunchError> {
        debug!(
            "Running [{}] {:?} in [{}]",
            request.program.display(),
            request.args,
            request.cwd.display(),
        );
        let mut child = Command::new(&request.program)
            .args(&request.args)
            .current_dir(&request.cwd)
            .spawn()
            .map_err(|e| LaunchError::from_io(&request.program, e))?;
        let status = child
            .wait()
            .map_err(|e| LaunchError::from_io(&request.program, e))?;
        Ok(ChildExit::Exited(exit_code_of(status)))
    }
}

/// A signalled child reports `128 + signal`, the way shells do.
fn exit_code_of(status: ExitStatus) -> i32 {
    match status.code() {
        Some(c) => c,
        None => status.signal().map(|s| 128 + s).unwrap_or(FAILURE_EXIT_CODE),
    }
}
