//! `docker context inspect` output

use crate::error::{HelperError, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Length of the `unix://` scheme prefix
const UNIX_SCHEME_LEN: usize = "unix://".len();

/// The entry of the inspect output array that describes the context
///
/// Every field is optional so that an absent key surfaces as
/// [`HelperError::MissingKey`] instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextInspect {
    #[serde(rename = "Endpoints")]
    pub endpoints: Option<Endpoints>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Endpoints {
    pub docker: Option<Endpoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    #[serde(rename = "Host")]
    pub host: Option<String>,
}

impl ContextInspect {
    /// Host address of the docker endpoint
    pub fn docker_host(&self) -> Option<&str> {
        self.endpoints.as_ref()?.docker.as_ref()?.host.as_deref()
    }

    /// Socket path of the docker endpoint
    pub fn socket_path(&self) -> Result<PathBuf> {
        self.docker_host()
            .map(socket_path)
            .ok_or(HelperError::MissingKey)
    }
}

/// Parse inspect output, keeping only its first entry.
///
/// Text that is not JSON at all is a parse error. JSON of the wrong shape
/// (not an array, empty, wrong field types in the first entry) is treated
/// as missing keys. Later entries are never looked at.
pub fn parse_inspect(output: &str) -> Result<ContextInspect> {
    let value: serde_json::Value =
        serde_json::from_str(output).map_err(HelperError::ContextParse)?;

    let entries: Vec<serde_json::Value> =
        serde_json::from_value(value).map_err(|_| HelperError::MissingKey)?;
    let first = entries.into_iter().next().ok_or(HelperError::MissingKey)?;

    serde_json::from_value(first).map_err(|_| HelperError::MissingKey)
}

/// Strip the scheme off a `unix://` host address.
///
/// The scheme itself is not checked.
pub fn socket_path(host: &str) -> PathBuf {
    PathBuf::from(host.chars().skip(UNIX_SCHEME_LEN).collect::<String>())
}
