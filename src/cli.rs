//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (serve, rewrite, validate), and their associated argument
//! structs. Every global flag has an environment variable equivalent so the
//! Lambda function can be configured without arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "edge-host-rewriter",
    version,
    about = "CloudFront edge function that rewrites Host to the origin domain",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        edge-host-rewriter                            Run as a Lambda function\n  \
        edge-host-rewriter rewrite event.json         Rewrite a captured event locally\n  \
        edge-host-rewriter validate rewriter.yaml     Check a config file"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve origin-request events from the Lambda runtime (default)
    Serve,

    /// Rewrite a single event read from a file or stdin
    Rewrite(RewriteArgs),

    /// Validate a config file without starting
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Config file path (.yaml, .json, .toml)
    #[arg(short, long, global = true, env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Origin host written into the Host header
    #[arg(long, global = true, env = "ORIGIN_HOST")]
    pub origin_host: Option<String>,

    // -- Logging --
    /// Log level
    #[arg(short, long, global = true, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, global = true, conflicts_with = "pretty")]
    pub json: bool,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        edge-host-rewriter rewrite event.json                     From a file\n  \
        cat event.json | edge-host-rewriter rewrite               From stdin\n  \
        edge-host-rewriter rewrite --origin-host o.example.com    Override origin")]
pub struct RewriteArgs {
    /// Event JSON file (reads stdin when omitted)
    pub event: Option<PathBuf>,

    /// Print the rewritten request on a single line
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Config file to validate
    #[arg(default_value = "rewriter.yaml")]
    pub file: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: ValidateFormat,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ValidateFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["edge-host-rewriter"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.global.config.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "edge-host-rewriter",
            "rewrite",
            "event.json",
            "--origin-host",
            "origin.example.com",
            "--compact",
        ])
        .unwrap();

        assert_eq!(cli.global.origin_host.as_deref(), Some("origin.example.com"));
        let Some(Commands::Rewrite(args)) = cli.command else {
            panic!("expected rewrite subcommand");
        };
        assert_eq!(args.event, Some(PathBuf::from("event.json")));
        assert!(args.compact);
    }

    #[test]
    fn pretty_and_json_conflict() {
        let result = Cli::try_parse_from(["edge-host-rewriter", "--pretty", "--json"]);
        assert!(result.is_err());
    }
}
