//! Juggler helpers - small utilities for driving Docker Compose
//!
//! Two independent tools share this library:
//!
//! - `compose-command` prints the command prefix for invoking Docker Compose
//!   against a possibly rootless Docker context
//! - `compose-variables` lists the `${VAR}` substitutions a compose file uses

pub mod compose;
pub mod context;
pub mod error;
pub mod tools;

pub use error::{HelperError, Result};
