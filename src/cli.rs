use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "goscaffold", version, about = "Scaffold new Go backend projects")]
pub struct Cli {
    /// Configuration file to use instead of the per-user default.
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,
    /// Print the steps that would run without touching the filesystem.
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create boilerplate for a new project.
    Create(CreateArgs),
}

// Both default to empty so a missing flag is reported the same way as an empty one.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the project, also used as the Go module path.
    #[arg(short = 'n', long = "name", default_value = "")]
    pub name: String,
    /// Path where the project will be created.
    #[arg(short = 'p', long = "path", default_value = "")]
    pub path: String,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_args(cli: &Cli) -> &CreateArgs {
        match &cli.command {
            Command::Create(args) => args,
        }
    }

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from(["goscaffold", "create", "-n", "demo", "-p", "/tmp/work"]).unwrap();
        let args = create_args(&cli);
        assert_eq!(args.name, "demo");
        assert_eq!(args.path, "/tmp/work");
    }

    #[test]
    fn parses_long_flags_and_globals() {
        let cli = Cli::try_parse_from([
            "goscaffold",
            "create",
            "--name",
            "demo",
            "--path",
            "/tmp/work",
            "--dry-run",
            "-vv",
            "--config",
            "/etc/goscaffold.toml",
        ])
        .unwrap();
        assert_eq!(create_args(&cli).name, "demo");
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/goscaffold.toml")));
    }

    #[test]
    fn missing_flags_parse_as_empty() {
        let cli = Cli::try_parse_from(["goscaffold", "create"]).unwrap();
        let args = create_args(&cli);
        assert!(args.name.is_empty());
        assert!(args.path.is_empty());
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["goscaffold", "destroy"]).is_err());
    }
}
