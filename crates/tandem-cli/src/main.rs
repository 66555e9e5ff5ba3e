// Rust guideline compliant 2026-02-06

//! Tandem CLI Application
//!
//! Command-line front end for the grouping solver and the task status
//! transition table.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tandem_cli::{commands, create_formatter, logging, should_use_color, terminal};
use tandem_core::{Config, OutputFormat as ConfigFormat};

#[derive(Parser, Debug)]
#[command(
    name = "tandem",
    version,
    about = "Tandem: capacity-bounded grouping and task status rules",
    after_help = "Examples:\n  printf '1 2 3 4 5\\n5\\n' | tandem groups\n  tandem groups --weights 3,3,3,3 --limit 6 --explain\n  tandem check created in_progress\n  tandem transitions completed --json\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ConfigFormat::Json,
            OutputFormat::Table => ConfigFormat::Table,
            OutputFormat::Plain => ConfigFormat::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Compute the minimum number of groups of at most two items
    Groups {
        /// Item weights; read from stdin when omitted
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        weights: Vec<i64>,

        /// Capacity limit for a pair
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Print the groups as well as the count
        #[arg(long)]
        explain: bool,
    },

    /// Check whether a status change is allowed
    Check {
        /// Current status
        from: String,

        /// Requested status
        to: String,

        /// Accept an unchanged status as a no-op
        #[arg(long)]
        allow_self: bool,
    },

    /// List allowed status transitions
    Transitions {
        /// Only show transitions out of this status
        status: Option<String>,
    },
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            let dir = std::env::current_dir().context("Failed to read current directory")?;
            Ok(Config::load(&dir)?)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = logging::init_tracing(cli.verbose) {
        eprintln!("Error: {:#}", error);
        return ExitCode::FAILURE;
    }

    let use_color = !cli.no_color && should_use_color();
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            return ExitCode::FAILURE;
        }
    };

    if let (Some(format), true) = (cli.format, cli.json) {
        if !matches!(format, OutputFormat::Json) {
            terminal::print_warning("--format takes precedence over --json", use_color);
        }
    }
    let format = match (cli.format, cli.json) {
        (Some(format), _) => format.into(),
        (None, true) => ConfigFormat::Json,
        (None, false) => config.output_format,
    };
    let formatter = create_formatter(format, use_color);
    let json = format == ConfigFormat::Json;

    let result = match cli.command {
        Commands::Groups {
            weights,
            limit,
            explain,
        } => commands::groups::execute(
            weights,
            limit,
            explain,
            std::io::stdin().lock(),
            formatter.as_ref(),
        ),
        Commands::Check {
            from,
            to,
            allow_self,
        } => commands::check::execute(&from, &to, allow_self, &config, json, formatter.as_ref()),
        Commands::Transitions { status } => {
            commands::transitions::execute(status.as_deref(), formatter.as_ref())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(error = ?error, "command failed");
            eprintln!("{}", formatter.format_error(&format!("{:#}", error)));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["tandem", "transitions"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli2 = Cli::try_parse_from(["tandem", "-vv", "transitions"]).unwrap();
        assert_eq!(cli2.verbose, 2);
    }

    #[test]
    fn cli_parse_weights_and_negative_limit() {
        let cli = Cli::try_parse_from(["tandem", "groups", "--weights", "1,2,3", "--limit", "-1"])
            .unwrap();
        match cli.command {
            Commands::Groups { weights, limit, .. } => {
                assert_eq!(weights, vec![1, 2, 3]);
                assert_eq!(limit, Some(-1));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn cli_parse_config_option() {
        let cli =
            Cli::try_parse_from(["tandem", "--config", "tandem.toml", "check", "created", "completed"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("tandem.toml")));
    }
}
