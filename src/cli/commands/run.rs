use crate::cli::Output;
use crate::config::GlerblConfig;
use crate::context::CheckContext;
use crate::git::GitRepo;
use crate::hooks::{HookName, Runner, Verdict};
use crate::registry::CheckRegistry;
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Clone)]
pub struct RunArgs {
    /// Hook name to run (e.g. pre-commit)
    pub hook: HookName,

    /// Check these files instead of the staged changes
    #[arg(short, long, num_args = 1.., conflicts_with = "all")]
    pub files: Vec<PathBuf>,

    /// Check every tracked file instead of the staged changes
    #[arg(long)]
    pub all: bool,

    /// Run checks concurrently (overrides runner.parallel)
    #[arg(long)]
    pub parallel: bool,

    /// Per-check timeout in seconds, 0 disables it (overrides runner.timeout_secs)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

pub async fn execute(args: RunArgs, config_path: Option<&str>, output: &Output) -> Result<Verdict> {
    let config = GlerblConfig::load_with_custom_config(config_path)?;
    let hooks = config.hook_config()?;
    let registry = CheckRegistry::builtin(&config.checks)?;

    let mut options = config.runner_options();
    if args.parallel {
        options.parallel = true;
    }
    if let Some(secs) = args.timeout {
        options.timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }

    let ctx = build_context(&args)?;
    output.verbose(&format!(
        "Checking {} file(s) under {}",
        ctx.changed_files().len(),
        ctx.root().display()
    ));

    let report = Runner::new(options)
        .run(args.hook, &hooks, &registry, Arc::new(ctx))
        .await?;

    match args.format {
        ReportFormat::Text => output.report(&report),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(report.verdict())
}

/// Collect the working-tree context for this invocation
fn build_context(args: &RunArgs) -> Result<CheckContext> {
    let current_dir = std::env::current_dir()?;

    if !args.files.is_empty() {
        // Explicit files do not need a repository; fall back to the current
        // directory as root outside of one.
        let root = match GitRepo::discover() {
            Ok(git) => git.workdir()?.to_path_buf(),
            Err(e) => {
                tracing::debug!("No repository, using current directory as root: {e:#}");
                current_dir.clone()
            }
        };
        let files = args.files.iter().map(|file| current_dir.join(file)).collect();
        return Ok(CheckContext::new(root, files));
    }

    let git = GitRepo::discover()?;
    let root = git.workdir()?.to_path_buf();
    let files = if args.all {
        git.get_tracked_files()?
    } else {
        git.get_staged_files()?
    };

    Ok(CheckContext::new(root, files))
}
