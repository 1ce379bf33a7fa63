//! Docker Compose version detection

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Oldest Docker Compose that can be pointed at a Docker context
pub const MIN_CONTEXT_VERSION: ComposeVersion = ComposeVersion::new(2, 0, 0);

/// A `major.minor.patch` version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ComposeVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ComposeVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Find the first version number in `docker compose version` output,
    /// e.g. `Docker Compose version v2.24.6-desktop.1`
    pub fn parse(output: &str) -> Option<Self> {
        static VERSION: OnceLock<Regex> = OnceLock::new();
        let re = VERSION.get_or_init(|| {
            Regex::new(r"v?(\d+)\.(\d+)(?:\.(\d+))?").expect("version pattern is valid")
        });

        let caps = re.captures(output)?;
        let part = |i: usize| -> Option<u64> {
            caps.get(i).map_or(Some(0), |m| m.as_str().parse().ok())
        };

        Some(Self::new(part(1)?, part(2)?, part(3)?))
    }

    /// Whether this version can use `docker -c <context> compose`
    pub fn supports_contexts(&self) -> bool {
        *self >= MIN_CONTEXT_VERSION
    }
}

impl fmt::Display for ComposeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
