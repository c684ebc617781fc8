//! Configuration command implementations

use crate::cli::Output;
use crate::config::GlerblConfig;
use crate::error::ConfigError;
use crate::registry::CheckRegistry;
use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

#[derive(Args, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommand {
    /// Show the merged configuration
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
    /// Validate hook bindings and check settings
    Validate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

pub fn execute(args: ConfigArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = GlerblConfig::load_with_custom_config(config_path)?;

    match args.command {
        ConfigCommand::Show { format } => show(&config, format),
        ConfigCommand::Validate => validate(&config, output),
    }
}

fn show(config: &GlerblConfig, format: ConfigFormat) -> Result<()> {
    let rendered = match format {
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yml::to_string(config)?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

fn validate(config: &GlerblConfig, output: &Output) -> Result<()> {
    let hooks = config.hook_config()?;
    let registry = CheckRegistry::builtin(&config.checks)?;

    for (hook, checks) in hooks.iter() {
        for identifier in checks {
            if !registry.contains(identifier) {
                return Err(ConfigError::UnknownCheck {
                    hook: hook.to_string(),
                    identifier: identifier.clone(),
                }
                .into());
            }
        }
        output.table_row(hook.as_str(), &format!("{} checks", checks.len()));
    }

    output.success("Configuration is valid");
    Ok(())
}
