// SPDX-License-Identifier: MIT

//! Process launching for Windows.
//!
//! Calls `CreateProcessW` directly rather than going through
//! `std::process::Command`, so the launcher owns the process handle and can
//! tell "created but no handle" apart from a real failure.

mod conv;
mod error;
mod launch;
mod launch_quote;
mod process;

pub(crate) use conv::as_c_str_w;
pub use launch::WindowsSpawner;
