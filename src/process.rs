//! External process invocation (`git`, `gh`, `az`).

use log::debug;
use std::io;
use std::path::Path;
use std::process::Command;

/// Captured result of an external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn ok<S: Into<String>>(stdout: S) -> Self {
        Self { success: true, stdout: stdout.into(), stderr: String::new() }
    }

    pub fn failed<S: Into<String>>(stderr: S) -> Self {
        Self { success: false, stdout: String::new(), stderr: stderr.into() }
    }
}

/// Runs external binaries.
pub trait ProcessRunner {
    /// Runs `program` with `args` and waits for it to finish.
    ///
    /// # Errors
    /// Returns an error if the program cannot be spawned (usually not installed).
    fn run(&self, program: &str, args: &[&str]) -> io::Result<ProcessOutput>;
}

/// Runner backed by `std::process::Command`, optionally pinned to a working directory.
#[derive(Debug, Default)]
pub struct SystemProcessRunner {
    working_dir: Option<std::path::PathBuf>,
}

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self { working_dir: Some(dir.as_ref().to_path_buf()) }
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<ProcessOutput> {
        debug!("Running '{} {}'", program, args.join(" "));
        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        let output = command.output()?;
        Ok(ProcessOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Runs a command, treating a non-zero exit and a spawn failure the same way.
///
/// # Returns
/// * `Ok(stdout)` - trimmed standard output on success
/// * `Err(diagnostic)` - standard error, or the spawn error message
pub fn invoke(
    runner: &dyn ProcessRunner,
    program: &str,
    args: &[&str],
) -> std::result::Result<String, String> {
    match runner.run(program, args) {
        Ok(output) if output.success => Ok(output.stdout.trim().to_string()),
        Ok(output) => {
            let stderr = output.stderr.trim();
            Err(if stderr.is_empty() {
                format!("'{program}' exited with a failure status")
            } else {
                stderr.to_string()
            })
        }
        Err(err) => Err(format!("'{program}' is not installed or you're not logged in ({err})")),
    }
}
