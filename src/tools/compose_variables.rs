//! `compose-variables`: list the variables a compose file substitutes

use super::EXIT_FAILURE;
use crate::compose::{scrape, ComposeParser};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

/// List the variables a Docker Compose file depends on
#[derive(Parser, Debug)]
#[command(name = "compose-variables")]
#[command(author = "Evoker Industries")]
#[command(version)]
#[command(about = "List the variables substituted in a Docker Compose file", long_about = None)]
pub struct Cli {
    /// Compose file to scan
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Extra arguments are accepted and ignored
    #[arg(trailing_var_arg = true, hide = true)]
    _rest: Vec<String>,
}

/// Print every variable of `file` on `out`, one per line.
///
/// Nothing reaches `out` unless the whole file parsed.
pub fn run(file: Option<&Path>, out: &mut impl Write, err: &mut impl Write) -> i32 {
    let Some(file) = file else {
        let _ = writeln!(out, "ERROR: Please specify a file");
        return EXIT_FAILURE;
    };

    let doc = match ComposeParser::parse_file(file) {
        Ok(doc) => doc,
        Err(e) => {
            let _ = writeln!(err, "{}", e);
            return EXIT_FAILURE;
        }
    };

    for variable in scrape(&doc) {
        if writeln!(out, "{}", variable).is_err() {
            return EXIT_FAILURE;
        }
    }
    0
}
