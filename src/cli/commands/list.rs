use crate::cli::Output;
use crate::config::GlerblConfig;
use crate::hooks::HookName;
use crate::registry::CheckRegistry;
use anyhow::Result;
use clap::Args;

#[derive(Args, Clone, Default)]
pub struct ListArgs {
    /// Only show the checks configured for this hook
    pub hook: Option<HookName>,
}

pub fn execute(args: ListArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = GlerblConfig::load_with_custom_config(config_path)?;
    let hooks = config.hook_config()?;
    let registry = CheckRegistry::builtin(&config.checks)?;

    if args.hook.is_none() {
        output.header("Registered checks");
        for check in registry.iter() {
            output.table_row(check.identifier(), check.description());
        }
    }

    let selected: Vec<_> = hooks
        .iter()
        .filter(|(hook, _)| args.hook.is_none_or(|wanted| wanted == *hook))
        .collect();

    if selected.is_empty() {
        output.blank_line();
        output.info("No checks configured");
        return Ok(());
    }

    for (hook, checks) in selected {
        output.header(hook.as_str());
        for (position, identifier) in checks.iter().enumerate() {
            if registry.contains(identifier) {
                output.list_item(&format!("{}. {identifier}", position + 1));
            } else {
                output.warning(&format!("{}. {identifier} (unknown check)", position + 1));
            }
        }
    }

    Ok(())
}
