//! External command invocation with host-specific shell selection.
//!
//! Package-manager command lines contain shell syntax (space-joined argument
//! lists), so the line is handed to a shell as a single string instead of being
//! split into arguments here. The shell is chosen once from a [`HostOs`]
//! descriptor, which keeps the choice testable without running on both
//! operating systems.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Operating system family the command will run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Posix,
    Windows,
}

impl HostOs {
    /// The family of the machine this process is running on.
    pub fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Posix
        }
    }

    /// Shell program and leading arguments that make the shell execute a
    /// single command-line string.
    pub fn shell_invocation(self) -> (&'static str, &'static [&'static str]) {
        match self {
            HostOs::Posix => ("bash", &["-c"]),
            HostOs::Windows => ("powershell.exe", &[]),
        }
    }
}

/// How the subprocess's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoMode {
    /// Output is captured and discarded; nothing reaches the user's terminal.
    Captured,
    /// Streams are inherited so the user sees live output (install progress).
    Inherited,
}

/// One external command to run: the shell line, where to run it, and how to
/// wire its streams. Ephemeral; built per call.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub command_line: String,
    pub work_dir: PathBuf,
    pub io: IoMode,
}

impl CommandSpec {
    pub fn captured<P: AsRef<Path>>(command_line: impl Into<String>, work_dir: P) -> Self {
        Self {
            command_line: command_line.into(),
            work_dir: work_dir.as_ref().to_path_buf(),
            io: IoMode::Captured,
        }
    }

    pub fn interactive<P: AsRef<Path>>(command_line: impl Into<String>, work_dir: P) -> Self {
        Self {
            command_line: command_line.into(),
            work_dir: work_dir.as_ref().to_path_buf(),
            io: IoMode::Inherited,
        }
    }

    /// Executes the command synchronously and waits for it to exit.
    ///
    /// Reports rather than panics: a command that cannot be started maps to
    /// [`Error::ProcessSpawnError`], a non-zero exit to
    /// [`Error::ProcessFailed`]. The caller decides whether either is fatal.
    pub fn run(&self, host: HostOs) -> Result<()> {
        let (shell, shell_args) = host.shell_invocation();

        let mut command = Command::new(shell);
        command.args(shell_args).arg(&self.command_line).current_dir(&self.work_dir);

        if self.io == IoMode::Captured {
            command.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
        }

        let status = command.status().map_err(|e| Error::ProcessSpawnError {
            command: self.command_line.clone(),
            e: e.to_string(),
        })?;

        if !status.success() {
            return Err(Error::ProcessFailed { command: self.command_line.clone(), status });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_hosts_use_bash() {
        let (shell, args) = HostOs::Posix.shell_invocation();
        assert_eq!(shell, "bash");
        assert_eq!(args, &["-c"][..]);
    }

    #[test]
    fn windows_hosts_use_powershell() {
        let (shell, args) = HostOs::Windows.shell_invocation();
        assert_eq!(shell, "powershell.exe");
        assert!(args.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn captured_run_succeeds_for_zero_exit() {
        let spec = CommandSpec::captured("true", std::env::temp_dir());
        assert!(spec.run(HostOs::Posix).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn captured_run_reports_non_zero_exit() {
        let spec = CommandSpec::captured("exit 3", std::env::temp_dir());
        let err = spec.run(HostOs::Posix).unwrap_err();
        assert!(matches!(err, Error::ProcessFailed { command, .. } if command == "exit 3"));
    }

    #[cfg(unix)]
    #[test]
    fn captured_run_does_not_leak_output() {
        // Nothing to assert on the terminal itself; this exercises the
        // Stdio::null wiring and the working-directory plumbing.
        let dir = std::env::temp_dir();
        let spec = CommandSpec::captured("pwd && echo captured", &dir);
        assert!(spec.run(HostOs::Posix).is_ok());
    }
}
