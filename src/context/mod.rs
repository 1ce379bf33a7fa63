//! Docker context resolution
//!
//! Works out which command prefix reaches the daemon behind a Docker
//! context: rootless daemons own their socket and need no `sudo`, system
//! daemons do.

pub mod cli;
pub mod inspect;
pub mod resolver;
pub mod version;

#[cfg(test)]
pub(crate) mod testing;

pub use cli::{CommandOutput, DockerCli, SystemDocker};
pub use inspect::ContextInspect;
pub use resolver::{ComposeCommand, ContextResolver};
pub use version::ComposeVersion;
