//! compose-command - print the Docker Compose command prefix
//!
//! Usage: compose-command [context]
//!
//! Prints one line such as `docker -c rootless compose` or
//! `sudo docker compose`, depending on who owns the context's socket.

use clap::Parser;
use juggler_helpers::context::{ContextResolver, SystemDocker};
use juggler_helpers::tools::compose_command::{run, Cli};
use juggler_helpers::tools::init_logging;
use std::io;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let resolver = ContextResolver::new(SystemDocker::new(cli.docker));
    let code = run(&resolver, cli.context.as_deref(), &mut io::stdout().lock());
    std::process::exit(code);
}
