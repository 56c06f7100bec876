// SPDX-License-Identifier: MIT

//! Various type conversion routines.

use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;

use windows_result::HRESULT;

/// Convert the OS string into a null-terminated wide (16-bit) C string.
pub fn as_c_str_w(s: &OsStr) -> Vec<u16> {
    s.encode_wide().chain(std::iter::once(0)).collect()
}

/// Recover the Win32 error code that an `HRESULT` was built from.
/// Codes outside the `FACILITY_WIN32` range are returned as their raw bits.
pub fn win32_code(hr: HRESULT) -> u32 {
    let bits = hr.0 as u32;
    if bits & 0xFFFF_0000 == 0x8007_0000 {
        bits & 0xFFFF
    } else {
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_string_is_nul_terminated() {
        let w = as_c_str_w(OsStr::new("ab"));
        assert_eq!(w, vec![b'a' as u16, b'b' as u16, 0]);
    }

    #[test]
    fn win32_code_round_trips() {
        assert_eq!(win32_code(HRESULT::from_win32(2)), 2);
        assert_eq!(win32_code(HRESULT::from_win32(5)), 5);
        // E_FAIL is not a wrapped Win32 code.
        assert_eq!(win32_code(HRESULT(0x8000_4005u32 as i32)), 0x8000_4005);
    }
}
