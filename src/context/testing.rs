//! Scripted Docker CLI for unit tests

use super::cli::{CommandOutput, DockerCli};
use crate::error::{HelperError, Result};
use std::cell::RefCell;
use std::path::Path;

pub(crate) const MODERN: &str = "Docker Compose version v2.24.6\n";

/// Replays canned output; `None` behaves like a missing binary
pub(crate) struct FakeDocker {
    pub(crate) version: Option<CommandOutput>,
    pub(crate) inspect: Option<CommandOutput>,
    pub(crate) inspected: RefCell<Vec<Option<String>>>,
}

impl FakeDocker {
    pub(crate) fn new(version: Option<CommandOutput>, inspect: Option<CommandOutput>) -> Self {
        Self {
            version,
            inspect,
            inspected: RefCell::new(Vec::new()),
        }
    }

    /// A modern Compose whose current context points at `socket`
    pub(crate) fn with_socket(socket: &Path) -> Self {
        let json = format!(
            r#"[{{"Name": "default", "Endpoints": {{"docker": {{"Host": "unix://{}"}}}}}}]"#,
            socket.display()
        );
        Self::new(
            Some(CommandOutput::success(MODERN)),
            Some(CommandOutput::success(json)),
        )
    }
}

fn not_found() -> HelperError {
    HelperError::Io(std::io::Error::from(std::io::ErrorKind::NotFound))
}

impl DockerCli for FakeDocker {
    fn compose_version(&self) -> Result<CommandOutput> {
        self.version.clone().ok_or_else(not_found)
    }

    fn inspect_context(&self, name: Option<&str>) -> Result<CommandOutput> {
        self.inspected.borrow_mut().push(name.map(str::to_string));
        self.inspect.clone().ok_or_else(not_found)
    }
}
