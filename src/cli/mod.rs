//! Command-line interface for glerbl
//!
//! This module provides the main CLI structure and command dispatch. Git hook
//! scripts call `glerbl run <hook>`; the remaining commands help inspect the
//! configuration.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
pub mod output;

pub use output::Output;

use commands::{config, list, run};

/// Exit status when every check passed
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status when at least one check failed or errored
pub const EXIT_CHECK_FAILURE: u8 = 1;
/// Exit status for configuration errors and other setup problems
pub const EXIT_CONFIG_ERROR: u8 = 2;

/// glerbl - ordered, fail-slow git hook checks
#[derive(Parser)]
#[command(
    name = "glerbl",
    version = env!("CARGO_PKG_VERSION"),
    about = "Ordered, fail-slow git hook checks",
    long_about = "glerbl runs the checks configured for a git hook against the working tree, \
                  reports every violation in one pass and exits non-zero if any check fails."
)]
pub struct Cli {
    /// Run as if started in <DIR> instead of current working directory
    #[arg(short = 'C', long = "directory", global = true)]
    pub directory: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the checks configured for a hook
    Run(run::RunArgs),
    /// List registered checks and the configured order per hook
    List(list::ListArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command, returning the process exit status
    pub async fn run(self) -> Result<u8> {
        // Change directory if specified
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose > 0, self.quiet);

        match self.command {
            Some(Commands::Run(args)) => {
                let verdict = run::execute(args, self.config.as_deref(), &output).await?;
                Ok(match verdict {
                    crate::hooks::Verdict::Pass => EXIT_SUCCESS,
                    crate::hooks::Verdict::Fail => EXIT_CHECK_FAILURE,
                })
            }
            Some(Commands::List(args)) => {
                list::execute(args, self.config.as_deref(), &output)?;
                Ok(EXIT_SUCCESS)
            }
            Some(Commands::Config(args)) => {
                config::execute(args, self.config.as_deref(), &output)?;
                Ok(EXIT_SUCCESS)
            }
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(EXIT_SUCCESS)
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,globset=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,globset=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // Logs go to stderr so JSON reports on stdout stay machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
