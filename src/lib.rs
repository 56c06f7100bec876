//! # timelapse-launcher
//!
//! Starts the Timelapse executable that sits next to this launcher in
//! template editor mode, waits for it, and exits with its exit code.

pub mod config;
pub mod launcher;
pub mod notify;
pub mod runtime;

pub use config::LaunchConfig;
pub use launcher::{Launcher, launch_dir, run_from_current_exe, target_path};
pub use notify::{ConsoleNotifier, Notify, PlatformNotifier};
pub use runtime::{ChildExit, LaunchRequest, PlatformSpawner, Spawn, error::LaunchError};
