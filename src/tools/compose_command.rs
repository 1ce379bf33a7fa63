//! `compose-command`: print the Docker Compose command prefix

use super::EXIT_FAILURE;
use crate::context::cli::DEFAULT_DOCKER_BINARY;
use crate::context::{ContextResolver, DockerCli};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Print the command prefix for running Docker Compose against a context
#[derive(Parser, Debug)]
#[command(name = "compose-command")]
#[command(author = "Evoker Industries")]
#[command(version)]
#[command(about = "Print the Docker Compose command prefix for a Docker context", long_about = None)]
pub struct Cli {
    /// Docker context to use (defaults to the current context)
    pub context: Option<String>,

    /// Docker CLI binary to run
    #[arg(long, env = "JUGGLER_DOCKER", default_value = DEFAULT_DOCKER_BINARY)]
    pub docker: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Extra arguments are accepted and ignored
    #[arg(trailing_var_arg = true, hide = true)]
    _rest: Vec<String>,
}

/// Resolve and print the prefix, or the failure diagnostic, on `out`
pub fn run<D: DockerCli>(
    resolver: &ContextResolver<D>,
    context: Option<&str>,
    out: &mut impl Write,
) -> i32 {
    let (line, code) = match resolver.resolve(context) {
        Ok(command) => (command.to_string(), 0),
        Err(e) => (e.to_string(), EXIT_FAILURE),
    };

    if writeln!(out, "{}", line).is_err() {
        return EXIT_FAILURE;
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::cli::CommandOutput;
    use crate::context::resolver::socket_owner;
    use crate::context::testing::{FakeDocker, MODERN};
    use tempfile::NamedTempFile;

    fn run_with(docker: FakeDocker, context: Option<&str>) -> (i32, String) {
        let mut out = Vec::new();
        let code = run(&ContextResolver::new(docker), context, &mut out);
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prints_prefix() {
        let socket = NamedTempFile::new().unwrap();
        let owner = socket_owner(socket.path()).unwrap();
        let resolver = ContextResolver::new(FakeDocker::with_socket(socket.path())).with_uid(owner);

        let mut out = Vec::new();
        assert_eq!(run(&resolver, Some("foo"), &mut out), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "docker -c foo compose\n");
    }

    #[test]
    fn test_prints_legacy_fallback() {
        let (code, out) = run_with(FakeDocker::new(Some(CommandOutput::failure()), None), None);
        assert_eq!(code, 0);
        assert_eq!(out, "sudo docker-compose\n");
    }

    #[test]
    fn test_inspect_failure_diagnostic() {
        let docker = FakeDocker::new(
            Some(CommandOutput::success(MODERN)),
            Some(CommandOutput::failure()),
        );
        let (code, out) = run_with(docker, Some("nope"));
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(out, "Failed to inspect Docker Context\n");
    }

    #[test]
    fn test_parse_failure_diagnostic() {
        let docker = FakeDocker::new(
            Some(CommandOutput::success(MODERN)),
            Some(CommandOutput::success("{")),
        );
        let (code, out) = run_with(docker, None);
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(out, "Failed to parse Docker Context information\n");
    }

    #[test]
    fn test_missing_key_diagnostic() {
        let docker = FakeDocker::new(
            Some(CommandOutput::success(MODERN)),
            Some(CommandOutput::success(r#"[{"Endpoints": {}}]"#)),
        );
        let (code, out) = run_with(docker, None);
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(out, "Docker Context information is missing a required key\n");
    }

    #[test]
    fn test_args_context_optional() {
        let cli = Cli::try_parse_from(["compose-command"]).unwrap();
        assert_eq!(cli.context, None);
        assert!(!cli.debug);
    }

    #[test]
    fn test_args_extra_ignored() {
        let cli = Cli::try_parse_from(["compose-command", "rootless", "extra", "more"]).unwrap();
        assert_eq!(cli.context.as_deref(), Some("rootless"));
    }
}
