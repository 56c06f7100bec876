// SPDX-License-Identifier: MIT

//! Run the process and wait for it, in the form used by the launcher.

use std::mem;

use tracing::debug;
use windows::{
    Win32::{
        Foundation::{ERROR_INVALID_PARAMETER, HANDLE, HANDLE_FLAG_INHERIT, SetHandleInformation},
        System::{
            Console::{GetStdHandle, STD_ERROR_HANDLE, STD_HANDLE, STD_INPUT_HANDLE, STD_OUTPUT_HANDLE},
            Threading::{
                CreateProcessW, PROCESS_CREATION_FLAGS, PROCESS_INFORMATION, STARTF_USESTDHANDLES,
                STARTUPINFOW,
            },
        },
    },
    core::{PCWSTR, PWSTR},
};

use crate::runtime::{
    error::LaunchError,
    spawn::{ChildExit, LaunchRequest, Spawn},
    spawn_windows::{conv::as_c_str_w, error, launch_quote, process::ChildProcess},
};

/// Launches through `CreateProcessW`, inheriting the environment and
/// standard handles of the launcher.
///
/// Handle inheritance is switched on for the call, so any other handle the
/// launcher holds marked inheritable is passed on as well.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsSpawner;

impl Spawn for WindowsSpawner {
    fn spawn_and_wait(&self, request: &LaunchRequest) -> Result<ChildExit, LaunchError> {
        let child = match create_process(request)? {
            Some(c) => c,
            None => return Ok(ChildExit::NoHandle),
        };
        let code = child
            .wait()
            .map_err(|e| error::launch_failed(&request.program, &e))?;
        // Exit codes are DWORDs; keep the bits so NTSTATUS values survive the round trip.
        Ok(ChildExit::Exited(code as i32))
    }
}


/// Start the process described by the request.
fn create_process(request: &LaunchRequest) -> Result<Option<ChildProcess>, LaunchError> {
    let mut cmdline = launch_quote::quote_arguments(request.program.as_os_str(), &request.args)
        .map_err(|e| LaunchError::failed(&request.program, ERROR_INVALID_PARAMETER.0, e.to_string()))?;
    let app = as_c_str_w(request.program.as_os_str());
    let cwd = as_c_str_w(request.cwd.as_os_str());
    debug!(
        "CreateProcessW [{}] in [{}]",
        String::from_utf16_lossy(&cmdline[..cmdline.len() - 1]),
        request.cwd.display(),
    );

    let si = STARTUPINFOW {
        cb: mem::size_of::<STARTUPINFOW>() as u32,
        dwFlags: STARTF_USESTDHANDLES,
        hStdInput: inheritable_std_handle(STD_INPUT_HANDLE),
        hStdOutput: inheritable_std_handle(STD_OUTPUT_HANDLE),
        hStdError: inheritable_std_handle(STD_ERROR_HANDLE),
        ..Default::default()
    };
    let mut pi = PROCESS_INFORMATION::default();

    unsafe {
        CreateProcessW(
            PCWSTR(app.as_ptr()), // application name
            Some(PWSTR(cmdline.as_mut_ptr())), // command line, arg 0 is the program itself
            None, // process attributes
            None, // thread attributes
            true, // needed for the std handles to reach the child
            PROCESS_CREATION_FLAGS(0),
            None, // inherit the environment
            PCWSTR(cwd.as_ptr()), // the launch directory
            &si,
            &mut pi,
        )
    }
    .map_err(|e| error::launch_failed(&request.program, &e))?;

    Ok(ChildProcess::from_information(pi))
}


/// The launcher's own standard handle, marked inheritable.
/// Without a console (started from Explorer) there is no handle; the child
/// then gets a null one, the same as it would from any GUI parent.
fn inheritable_std_handle(which: STD_HANDLE) -> HANDLE {
    let handle = match unsafe { GetStdHandle(which) } {
        Ok(h) if !h.is_invalid() => h,
        _ => return HANDLE::default(),
    };
    match unsafe { SetHandleInformation(handle, HANDLE_FLAG_INHERIT.0, HANDLE_FLAG_INHERIT) } {
        Ok(()) => handle,
        Err(e) => {
            debug!("std handle {which:?} not passed on: {e:?}");
            HANDLE::default()
        }
    }
}
