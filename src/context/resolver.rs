//! Compose command prefix resolution

use super::cli::DockerCli;
use super::inspect::parse_inspect;
use super::version::{ComposeVersion, MIN_CONTEXT_VERSION};
use crate::error::{HelperError, Result};
use std::fmt;
use std::os::unix::fs::MetadataExt;
use std::path::Path;
use tracing::{debug, warn};

/// Command prefix for running Docker Compose
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeCommand {
    /// Standalone `docker-compose`, assumed to need root
    Legacy,
    /// Compose plugin too old for contexts, assumed to need root
    ContextsUnsupported,
    /// Compose plugin, optionally scoped to a named context
    Plugin {
        sudo: bool,
        context: Option<String>,
    },
}

impl fmt::Display for ComposeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeCommand::Legacy => write!(f, "sudo docker-compose"),
            ComposeCommand::ContextsUnsupported => write!(f, "sudo docker compose"),
            ComposeCommand::Plugin { sudo, context } => {
                if *sudo {
                    write!(f, "sudo ")?;
                }
                write!(f, "docker")?;
                if let Some(name) = context {
                    write!(f, " -c {}", name)?;
                }
                write!(f, " compose")
            }
        }
    }
}

/// Effective user ID of this process
pub fn effective_uid() -> u32 {
    unsafe { libc::geteuid() }
}

/// Owning user ID of a path, following symlinks
pub fn socket_owner(path: &Path) -> Result<u32> {
    std::fs::metadata(path)
        .map(|meta| meta.uid())
        .map_err(|source| HelperError::SocketStat {
            path: path.to_path_buf(),
            source,
        })
}

/// Resolves the compose command prefix for a Docker context
pub struct ContextResolver<D> {
    docker: D,
    uid: u32,
}

impl<D: DockerCli> ContextResolver<D> {
    /// Create a resolver comparing socket ownership against this process
    pub fn new(docker: D) -> Self {
        Self {
            docker,
            uid: effective_uid(),
        }
    }

    /// Compare socket ownership against another user
    #[cfg(test)]
    pub(crate) fn with_uid(mut self, uid: u32) -> Self {
        self.uid = uid;
        self
    }

    /// Resolve the prefix for `context`, or the current context if `None`
    pub fn resolve(&self, context: Option<&str>) -> Result<ComposeCommand> {
        let version_output = match self.docker.compose_version() {
            Ok(output) if output.success => output,
            Ok(_) => {
                debug!("docker compose plugin unavailable, falling back to docker-compose");
                return Ok(ComposeCommand::Legacy);
            }
            Err(e) => {
                debug!("docker compose version failed to run: {}", e);
                return Ok(ComposeCommand::Legacy);
            }
        };

        if let Some(version) = ComposeVersion::parse(&version_output.stdout) {
            debug!("Docker Compose version {}", version);
            if !version.supports_contexts() {
                warn!(
                    "Docker Contexts are not supported below Docker Compose {}",
                    MIN_CONTEXT_VERSION
                );
                return Ok(ComposeCommand::ContextsUnsupported);
            }
        }

        let inspect = self
            .docker
            .inspect_context(context)
            .map_err(|_| HelperError::InspectFailed)?;
        if !inspect.success {
            return Err(HelperError::InspectFailed);
        }

        let socket = parse_inspect(&inspect.stdout)?.socket_path()?;
        let owner = socket_owner(&socket)?;
        debug!(
            "Socket {} is owned by uid {}, running as uid {}",
            socket.display(),
            owner,
            self.uid
        );

        Ok(ComposeCommand::Plugin {
            sudo: owner != self.uid,
            context: context.map(str::to_string),
        })
    }
}
