//! Privileged command execution.
//!
//! Every system mutation goes through [`PrivilegedRunner`], a thin seam over
//! `sudo <program> <args…>`. Stages only see the exit code and captured
//! stderr, so tests substitute a recording mock and `--dry-run` substitutes
//! a printer.

use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::SetupError;

/// Outcome of one privileged command.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    code: i32,
    stderr: String,
}

impl CommandOutcome {
    pub fn new(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code,
            stderr: stderr.into(),
        }
    }

    /// True when the command exited zero.
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Exit code, or -1 if the command was terminated by a signal.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Captured stderr, trimmed of whitespace.
    pub fn stderr_trimmed(&self) -> &str {
        self.stderr.trim()
    }
}

/// Executes commands with elevated privileges.
pub trait PrivilegedRunner {
    fn run_privileged(&self, program: &str, args: &[&str]) -> Result<CommandOutcome, SetupError>;
}

/// Real runner: prefixes commands with sudo unless already running as root.
///
/// sudo is resolved at call time so that merely constructing the runner has
/// no effect on hosts where the run turns out to be a no-op.
pub struct SudoRunner;

impl SudoRunner {
    pub fn new() -> Self {
        SudoRunner
    }
}

impl Default for SudoRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl PrivilegedRunner for SudoRunner {
    fn run_privileged(&self, program: &str, args: &[&str]) -> Result<CommandOutcome, SetupError> {
        let mut cmd = if unsafe { libc::getuid() } == 0 {
            Command::new(program)
        } else {
            let sudo = which::which("sudo")?;
            let mut cmd = Command::new(sudo);
            cmd.arg(program);
            cmd
        };

        debug!("running privileged: {} {}", program, args.join(" "));

        // stdin stays attached so sudo can ask for a password on the tty.
        let output = cmd
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| SetupError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        Ok(CommandOutcome::new(
            output.status.code().unwrap_or(-1),
            stderr,
        ))
    }
}

/// Dry-run runner: prints the command and reports success without executing.
pub struct DryRunRunner;

impl PrivilegedRunner for DryRunRunner {
    fn run_privileged(&self, program: &str, args: &[&str]) -> Result<CommandOutcome, SetupError> {
        println!("[dry-run] sudo {} {}", program, args.join(" "));
        Ok(CommandOutcome::new(0, String::new()))
    }
}

/// Append one line to a root-owned file via `sh -c '… >> file'`.
///
/// The redirection has to happen inside the privileged shell; a plain
/// `sudo echo … >> file` would redirect in the unprivileged parent.
pub fn append_line(
    runner: &dyn PrivilegedRunner,
    file: &Path,
    line: &str,
) -> Result<CommandOutcome, SetupError> {
    let script = format!("echo '{}' >> '{}'", line, file.display());
    runner.run_privileged("sh", &["-c", &script])
}
