//! compose-variables - list the variables a compose file substitutes
//!
//! Usage: compose-variables <compose-file>
//!
//! Prints each distinct `${VAR}` reference, plus every pass-through
//! entry of a service's `environment` list, one per line.

use clap::Parser;
use juggler_helpers::tools::compose_variables::{run, Cli};
use juggler_helpers::tools::init_logging;
use std::io;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let code = run(
        cli.file.as_deref(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    std::process::exit(code);
}
