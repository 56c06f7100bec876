// SPDX-License-Identifier: MIT

//! Windows based errors.

use std::path::Path;

use windows_result::HRESULT;

use super::conv::win32_code;
use crate::runtime::error::LaunchError;

/// The system message table text for a Win32 error code.
pub fn system_message(code: u32) -> String {
    let msg = HRESULT::from_win32(code).message();
    if msg.is_empty() {
        format!("unknown error 0x{code:08X}")
    } else {
        msg
    }
}

/// Turn a failed Win32 call made while starting `path` into a launch failure.
pub fn launch_failed(path: &Path, e: &windows::core::Error) -> LaunchError {
    let code = win32_code(e.code());
    LaunchError::failed(path, code, system_message(code))
}
