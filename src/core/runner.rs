//! Timed subprocess execution against the target tool

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

/// Outcome of one tool invocation.
///
/// Non-zero exits and captured stderr are data, not errors: a failing
/// invocation is recorded and the benchmark moves on.
#[derive(Debug)]
pub struct Invocation {
    pub elapsed: Duration,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the target tool with a fixed working directory.
///
/// The working directory is pinned to the provisioned project dir so
/// the tool's own project discovery resolves against benchmark state
/// only.
#[derive(Debug)]
pub struct CommandRunner {
    tool: PathBuf,
    cwd: PathBuf,
}

impl CommandRunner {
    pub fn new(tool: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            cwd: cwd.into(),
        }
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }

    /// Run one command line, timing spawn through exit.
    ///
    /// A spawn failure (missing binary, permissions) is reported the
    /// same way as a non-zero exit: `success = false` with the OS error
    /// text in `stderr`. Blocks until the child exits; there is no
    /// timeout.
    pub fn run(&self, args: &[&str]) -> Invocation {
        let start = Instant::now();
        match Command::new(&self.tool)
            .args(args)
            .current_dir(&self.cwd)
            .output()
        {
            Ok(output) => Invocation {
                elapsed: start.elapsed(),
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(err) => Invocation {
                elapsed: start.elapsed(),
                success: false,
                stdout: String::new(),
                stderr: err.to_string(),
            },
        }
    }
}
