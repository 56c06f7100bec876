// SPDX-License-Identifier: MIT

//! Stand-in for the Timelapse executable, used by the launcher's tests.
//!
//! Writes each received argument on its own line, then its working
//! directory, to the file named by `COMPANION_REPORT`.  Prints
//! `COMPANION_STDOUT` (if set) on standard output, then exits with
//! `COMPANION_EXIT` (default 0).

use std::io::Write;

fn main() {
    let mut report = String::new();
    for arg in std::env::args_os().skip(1) {
        report.push_str(&arg.to_string_lossy());
        report.push('\n');
    }
    let cwd = std::env::current_dir().unwrap();
    report.push_str(&cwd.to_string_lossy());
    report.push('\n');

    if let Some(path) = std::env::var_os("COMPANION_REPORT") {
        std::fs::write(path, report).unwrap();
    }

    if let Ok(marker) = std::env::var("COMPANION_STDOUT") {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{marker}").unwrap();
        stdout.flush().unwrap();
    }

    let code: i32 = std::env::var("COMPANION_EXIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    std::process::exit(code);
}
