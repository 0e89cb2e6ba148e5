//! CLI commands.

mod decode;
mod encode;
mod inspect;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// resid - Encode, decode and inspect calendar resource identifiers.
#[derive(Debug, Parser)]
#[command(name = "resid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "RESID_FORMAT")]
    format: Option<String>,

    /// Path to a JSON config file.
    #[arg(long, global = true, env = "RESID_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode a context id, entity id and calendar user type as a URI.
    Encode(encode::EncodeCommand),

    /// Decode one or more URIs.
    Decode(decode::DecodeCommand),

    /// Show the bit-level layout of a URI.
    Inspect(inspect::InspectCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Number of `-v` flags given.
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;
        let format = OutputFormat::resolve(self.format.as_deref(), config.format.as_deref());

        let ctx = CommandContext { config, format };

        match self.command {
            Commands::Encode(cmd) => cmd.run(&ctx),
            Commands::Decode(cmd) => cmd.run(&ctx),
            Commands::Inspect(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("resid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_encode_negative_ids() {
        let cli = Cli::try_parse_from([
            "resid", "encode", "--context", "-5", "--entity", "-1", "--type", "group",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Encode(_)));
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["resid", "-vv", "version"]).unwrap();
        assert_eq!(cli.verbosity(), 2);
    }

    #[test]
    fn test_decode_requires_input() {
        assert!(Cli::try_parse_from(["resid", "decode"]).is_err());
    }
}
