// SPDX-License-Identifier: MIT

//! Telling the user that the launch failed.
//!
//! The launcher normally runs without a console, so on Windows a failure is
//! shown as a modal message box.  Elsewhere it goes to standard error.

/// Shows a blocking error notification.
pub trait Notify {
    fn error(&self, title: &str, message: &str);
}

impl<T: Notify + ?Sized> Notify for &T {
    fn error(&self, title: &str, message: &str) {
        (**self).error(title, message)
    }
}

/// A modal message box with an error icon and a single OK button.
#[cfg(target_os = "windows")]
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogNotifier;

#[cfg(target_os = "windows")]
impl Notify for DialogNotifier {
    fn error(&self, title: &str, message: &str) {
        use std::ffi::OsStr;
        use windows::{
            Win32::UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK, MessageBoxW},
            core::PCWSTR,
        };

        use crate::runtime::as_c_str_w;

        let text = as_c_str_w(OsStr::new(message));
        let caption = as_c_str_w(OsStr::new(title));
        unsafe {
            // No owner window; returns once the user presses OK.
            let _ = MessageBoxW(
                None,
                PCWSTR(text.as_ptr()),
                PCWSTR(caption.as_ptr()),
                MB_OK | MB_ICONERROR,
            );
        }
    }
}

/// Writes `<title>: <message>` as one line on standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn format(title: &str, message: &str) -> String {
        format!("{title}: {message}")
    }
}

impl Notify for ConsoleNotifier {
    fn error(&self, title: &str, message: &str) {
        eprintln!("{}", Self::format(title, message));
    }
}

#[cfg(target_os = "windows")]
pub type PlatformNotifier = DialogNotifier;

#[cfg(not(target_os = "windows"))]
pub type PlatformNotifier = ConsoleNotifier;

#[cfg(test)]
mod tests {
    use super::ConsoleNotifier;

    #[test]
    fn console_line_leads_with_title() {
        assert_eq!(
            ConsoleNotifier::format("Timelapse Template Editor", "Could not find Timelapse in /opt."),
            "Timelapse Template Editor: Could not find Timelapse in /opt.",
        );
    }
}
