pub(crate) mod compare;
pub(crate) mod completions;
pub(crate) mod normalize;
pub(crate) mod rules;

use std::path::Path;

use anyhow::{Context, Result};
use lintparity_config::{self as cli, UserConfig};
use lintparity_normalize::RuleMap;

pub(crate) fn dispatch(cli: cli::Cli) -> Result<()> {
    let global = &cli.global;
    match cli.command {
        cli::Commands::Compare(args) => compare::handle(args, global),
        cli::Commands::Normalize(args) => normalize::handle(args, global),
        cli::Commands::Rules(args) => rules::handle(args, global),
        cli::Commands::Completions(args) => completions::handle(args),
    }
}

/// `--config` if given, else `lintparity.toml` in the working directory.
pub(crate) fn load_config(global: &cli::GlobalArgs) -> Result<Option<UserConfig>> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = UserConfig::discover(global.config.as_deref(), &cwd)?;
    if config.is_some() {
        tracing::debug!("loaded configuration");
    }
    Ok(config)
}

/// Builtin rule map with config and `--rule-map` layered on top.
pub(crate) fn load_rule_map(config: Option<&UserConfig>, rule_map: Option<&Path>) -> Result<RuleMap> {
    cli::effective_rule_map(config, rule_map).with_context(|| match rule_map {
        Some(path) => format!("Failed to load rule map {}", path.display()),
        None => "Failed to load rule map".to_string(),
    })
}
