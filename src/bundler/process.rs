//! Subprocess execution.
//!
//! Every external command the pipeline runs (interpreter probe, pip,
//! PyInstaller) is described by a [`CommandSpec`] and executed through a
//! [`ProcessRunner`]. [`SystemRunner`] spawns real processes; tests provide
//! their own runner.

use crate::bundler::error::{Error, Result};
use std::{
    ffi::OsString,
    future::Future,
    path::{Path, PathBuf},
};

/// An ordered command line plus the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: OsString,
    args: Vec<String>,
    current_dir: PathBuf,
}

impl CommandSpec {
    /// Creates a command for `program` running in `current_dir`.
    pub fn new(program: impl Into<OsString>, current_dir: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: current_dir.as_ref().to_path_buf(),
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Renders the command line for logs and error messages.
    pub fn display(&self) -> String {
        let mut rendered = self.program.to_string_lossy().into_owned();
        for arg in &self.args {
            rendered.push(' ');
            if arg.contains(char::is_whitespace) {
                rendered.push('"');
                rendered.push_str(arg);
                rendered.push('"');
            } else {
                rendered.push_str(arg);
            }
        }
        rendered
    }
}

/// How a finished process exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Exit code; `None` when terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessOutcome {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ProcessOutcome {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Runs a command to completion.
///
/// Implementations must block (await) until the process exits. Failing to
/// start the process is an error; a non-zero exit is a normal outcome.
pub trait ProcessRunner {
    fn run(&self, command: &CommandSpec) -> impl Future<Output = Result<ProcessOutcome>> + Send;
}

/// Spawns real processes with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    async fn run(&self, command: &CommandSpec) -> Result<ProcessOutcome> {
        log::debug!(
            "Running `{}` in {}",
            command.display(),
            command.current_dir().display()
        );

        let status = tokio::process::Command::new(command.program())
            .args(command.get_args())
            .current_dir(command.current_dir())
            .status()
            .await
            .map_err(|error| Error::CommandFailed {
                command: command.display(),
                error,
            })?;

        log::debug!("`{}` exited with {:?}", command.display(), status.code());
        Ok(status.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let cmd = CommandSpec::new("python3", "/tmp")
            .arg("-c")
            .arg("import PyInstaller");
        assert_eq!(cmd.display(), r#"python3 -c "import PyInstaller""#);
    }

    #[test]
    fn only_zero_is_success() {
        assert!(ProcessOutcome::from_code(0).success());
        assert!(!ProcessOutcome::from_code(1).success());
        assert!(!ProcessOutcome { code: None }.success());
    }
}
