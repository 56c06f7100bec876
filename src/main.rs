// SPDX-License-Identifier: MIT

// No console window; failures are reported with a message box.
#![windows_subsystem = "windows"]

use tracing_subscriber::EnvFilter;

fn main() {
    setup_logging();
    let code = timelapse_launcher::run_from_current_exe();
    std::process::exit(code);
}

/// Log to standard error, filtered by `RUST_LOG` (default `warn`).
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
