//! Docker Compose file parser

use crate::error::{HelperError, Result};
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

/// Compose file parser
///
/// Documents are kept as untyped YAML trees: variable references may appear
/// anywhere, including places no compose schema describes.
pub struct ComposeParser;

impl ComposeParser {
    /// Parse compose file from path
    pub fn parse_file(path: &Path) -> Result<Value> {
        let content = std::fs::read_to_string(path).map_err(|source| HelperError::ComposeRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", content.len(), path.display());

        Self::parse_str(&content)
    }

    /// Parse compose file from string, resolving `<<` merge keys
    pub fn parse_str(content: &str) -> Result<Value> {
        let mut doc: Value = serde_yaml::from_str(content)?;
        doc.apply_merge()?;
        Ok(doc)
    }
}
