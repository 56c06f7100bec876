// SPDX-License-Identifier: MIT

//! Starts the companion process and waits for it.
//!
//! `PlatformSpawner` is the `Spawn` implementation for the build target:
//! `CreateProcessW` on Windows, `std::process::Command` on Unix.  Either way
//! the caller blocks until the child exits and gets its exit code back, or
//! gets a `LaunchError` carrying the OS error code.

pub mod error;
pub mod spawn;

pub use spawn::{ChildExit, LaunchRequest, Spawn};

#[cfg(target_os = "windows")]
mod spawn_windows;

#[cfg(target_os = "windows")]
pub(crate) use spawn_windows::as_c_str_w;

#[cfg(target_os = "windows")]
pub use spawn_windows::WindowsSpawner as PlatformSpawner;

#[cfg(unix)]
mod spawn_unix;

#[cfg(unix)]
pub use spawn_unix::UnixSpawner as PlatformSpawner;
