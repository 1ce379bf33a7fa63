//! Docker Compose file inspection
//!
//! This module reads compose files and extracts the variable substitutions
//! they depend on.

pub mod parser;
pub mod variables;

pub use parser::ComposeParser;
pub use variables::{scrape, VariableCollector, VariableSet};
