//! Utility helpers for running the launcher binary against a companion double.

use std::{
    env::consts::EXE_SUFFIX,
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
    sync::{Mutex, MutexGuard},
};

/// Title the launcher puts in front of every notification.
pub const TITLE: &str = "Timelapse Template Editor";

/// Writing an executable while another test thread spawns a child can make
/// the exec fail with ETXTBSY, so installs and runs take turns.
static EXEC_LOCK: Mutex<()> = Mutex::new(());

pub fn exec_lock() -> MutexGuard<'static, ()> {
    EXEC_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Name the launcher looks for next to itself.
pub fn companion_name() -> String {
    format!("Timelapse{EXE_SUFFIX}")
}

/// Find the `companion_double` example, which `cargo test` builds next to
/// the launcher binary.
pub fn find_companion_double() -> PathBuf {
    let launcher = PathBuf::from(env!("CARGO_BIN_EXE_timelapse-launcher"));
    let mut exec = launcher
        .parent()
        .expect("launcher binary has no parent directory")
        .to_path_buf();
    exec.push("examples");
    exec.push(format!("companion_double{EXE_SUFFIX}"));
    let exec_s: String = exec.as_os_str().to_string_lossy().to_string();
    assert!(
        exec.is_file(),
        "could not find {}; did you remember to run 'cargo build --example companion_double'?",
        exec_s,
    );
    exec
}

/// A temporary install directory holding a copy of the launcher.
pub struct Install {
    dir: tempfile::TempDir,
}

impl Install {
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("launch-dir")
            .tempdir_in(env!("CARGO_TARGET_TMPDIR"))
            .expect("failed to create the install directory");
        fs::copy(
            env!("CARGO_BIN_EXE_timelapse-launcher"),
            dir.path().join(format!("launcher{EXE_SUFFIX}")),
        )
        .expect("failed to copy the launcher");
        Install { dir }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn launcher(&self) -> PathBuf {
        self.dir().join(format!("launcher{EXE_SUFFIX}"))
    }

    pub fn companion(&self) -> PathBuf {
        self.dir().join(companion_name())
    }

    pub fn report(&self) -> PathBuf {
        self.dir().join("report.txt")
    }

    /// Add the companion double under the companion's name.
    pub fn with_companion(self) -> Self {
        fs::copy(find_companion_double(), self.companion()).expect("failed to copy the companion");
        self
    }

    /// Run the launcher from `cwd`, asking the companion to exit with `exit`.
    pub fn run(&self, cwd: &Path, exit: i32) -> Output {
        self.command(cwd, exit)
            .output()
            .expect("failed to run the launcher")
    }

    pub fn command(&self, cwd: &Path, exit: i32) -> Command {
        let mut cmd = Command::new(self.launcher());
        cmd.current_dir(cwd)
            .env("COMPANION_REPORT", self.report())
            .env("COMPANION_EXIT", exit.to_string())
            .env("RUST_LOG", "off");
        cmd
    }

    /// Arguments and working directory recorded by the companion, if it ran.
    pub fn recorded(&self) -> Option<(Vec<String>, PathBuf)> {
        let report = fs::read_to_string(self.report()).ok()?;
        let mut lines: Vec<String> = report.lines().map(str::to_string).collect();
        let cwd = PathBuf::from(lines.pop()?);
        Some((lines, cwd))
    }
}

/// Lines of standard error that are launcher notifications.
#[allow(dead_code)]
pub fn notifications(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stderr)
        .lines()
        .filter(|l| l.starts_with(&format!("{TITLE}: ")))
        .map(str::to_string)
        .collect()
}

/// The number following "Error code " in a notification.
#[allow(dead_code)]
pub fn error_code(notification: &str) -> Option<u32> {
    let rest = notification.split("Error code ").nth(1)?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
