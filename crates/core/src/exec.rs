//! Command Execution
//!
//! Runs external processes and captures their streams behind a narrow
//! trait, so the provisioning pipeline can be exercised with a scripted
//! runner instead of spawning real commands.

use std::fmt;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// One external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
    /// Send stdout to the null device instead of capturing it.
    pub discard_stdout: bool,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            discard_stdout: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Discard stdout; success is then judged by exit status alone.
    pub fn discard_stdout(mut self) -> Self {
        self.discard_stdout = true;
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default)]
pub struct ExecOutput {
    /// Exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn ok() -> Self {
        Self {
            code: Some(0),
            ..Default::default()
        }
    }

    pub fn with_code(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Default::default()
        }
    }

    pub fn with_stderr(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Command execution errors
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs commands and reports their captured streams and exit code.
///
/// A non-zero exit is not an error at this layer; callers decide what an
/// unsuccessful exit means for them.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &CommandLine) -> Result<ExecOutput, ExecError>;
}

/// Runner backed by real processes.
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, command: &CommandLine) -> Result<ExecOutput, ExecError> {
        debug!("exec: {}", command);

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::null())
            .stderr(Stdio::piped());
        if command.discard_stdout {
            cmd.stdout(Stdio::null());
        } else {
            cmd.stdout(Stdio::piped());
        }

        let output = cmd.output().await.map_err(|source| ExecError::Spawn {
            program: command.program.clone(),
            source,
        })?;

        Ok(ExecOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_renders_program_and_args() {
        let cmd = CommandLine::new("sdkmanager").args(["--install", "platform-tools"]);
        assert_eq!(cmd.to_string(), "sdkmanager --install platform-tools");
    }

    #[test]
    fn success_requires_a_zero_exit() {
        assert!(ExecOutput::ok().success());
        assert!(!ExecOutput::with_code(1).success());
        assert!(!ExecOutput::default().success());
    }

    #[tokio::test]
    async fn system_runner_separates_the_streams() {
        let cmd = CommandLine::new("sh").args(["-c", "echo out; echo err >&2"]);
        let output = SystemRunner.run(&cmd).await.unwrap();
        assert!(output.success());
        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
    }

    #[tokio::test]
    async fn system_runner_reports_spawn_failures() {
        let cmd = CommandLine::new("sdk-provision-no-such-binary");
        let err = SystemRunner.run(&cmd).await.unwrap_err();
        assert!(matches!(err, ExecError::Spawn { .. }));
    }
}
