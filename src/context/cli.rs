//! Docker CLI invocation

use crate::error::Result;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

/// Default Docker CLI binary
pub const DEFAULT_DOCKER_BINARY: &str = "docker";

/// Outcome of one Docker CLI run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the command exited with status 0
    pub success: bool,
    /// Captured standard output
    pub stdout: String,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
        }
    }

    pub fn failure() -> Self {
        Self::default()
    }
}

/// The Docker CLI operations the resolver needs
pub trait DockerCli {
    /// Run `docker compose version`
    fn compose_version(&self) -> Result<CommandOutput>;

    /// Run `docker context inspect [name]`
    fn inspect_context(&self, name: Option<&str>) -> Result<CommandOutput>;
}

/// Runs the real Docker CLI, one blocking process at a time
#[derive(Debug, Clone)]
pub struct SystemDocker {
    binary: PathBuf,
}

impl SystemDocker {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        debug!("Running {} {}", self.binary.display(), args.join(" "));
        let mut cmd = Command::new(&self.binary);
        cmd.args(args).stdin(Stdio::null());
        cmd
    }
}

impl Default for SystemDocker {
    fn default() -> Self {
        Self::new(DEFAULT_DOCKER_BINARY)
    }
}

impl DockerCli for SystemDocker {
    fn compose_version(&self) -> Result<CommandOutput> {
        // stderr stays attached so a missing plugin explains itself
        let output = self
            .command(&["compose", "version"])
            .stderr(Stdio::inherit())
            .output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }

    fn inspect_context(&self, name: Option<&str>) -> Result<CommandOutput> {
        let mut args = vec!["context", "inspect"];
        args.extend(name);

        let output = self.command(&args).output()?;
        debug!("docker context inspect exited with {}", output.status);

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
