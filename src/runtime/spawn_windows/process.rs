// SPDX-License-Identifier: MIT

use windows::{
    Win32::{
        Foundation::{CloseHandle, GetLastError, HANDLE, WAIT_FAILED},
        System::Threading::{GetExitCodeProcess, INFINITE, PROCESS_INFORMATION, WaitForSingleObject},
    },
    core,
};


/// The handles returned by `CreateProcessW`, owned by the launcher.
///
/// Both handles are closed when this is dropped, whether or not the child
/// was waited on.
pub struct ChildProcess {
    process: HANDLE,
    thread: HANDLE,
}

impl ChildProcess {
    /// Take ownership of the process information.
    /// Returns None if no usable process handle came back; any thread
    /// handle is still released.
    pub fn from_information(info: PROCESS_INFORMATION) -> Option<Self> {
        let child = ChildProcess {
            process: info.hProcess,
            thread: info.hThread,
        };
        if child.process.is_invalid() {
            None
        } else {
            Some(child)
        }
    }

    /// Block until the child exits, then return its exit code.
    pub fn wait(&self) -> core::Result<u32> {
        unsafe {
            if WaitForSingleObject(self.process, INFINITE) == WAIT_FAILED {
                return Err(GetLastError().to_hresult().into());
            }

            let mut code = 0u32;
            GetExitCodeProcess(self.process, &mut code)?;
            Ok(code)
        }
    }
}


impl Drop for ChildProcess {
    fn drop(&mut self) {
        // Note: ignoring errors inside the drop.
        unsafe {
            if !self.thread.is_invalid() {
                let _ = CloseHandle(self.thread);
                self.thread = HANDLE::default();
            }
            if !self.process.is_invalid() {
                let _ = CloseHandle(self.process);
                self.process = HANDLE::default();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::Foundation::INVALID_HANDLE_VALUE;

    #[test]
    fn missing_process_handle_gives_none() {
        assert!(ChildProcess::from_information(PROCESS_INFORMATION::default()).is_none());
    }

    #[test]
    fn invalid_handle_value_gives_none() {
        let info = PROCESS_INFORMATION {
            hProcess: INVALID_HANDLE_VALUE,
            ..Default::default()
        };
        assert!(ChildProcess::from_information(info).is_none());
    }
}
