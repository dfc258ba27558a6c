//! Handler for the `lintparity rules` command.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use lintparity_config::{self as cli, RulesFormat};
use lintparity_normalize::{NamespaceTarget, RuleMap};

use super::{load_config, load_rule_map};

pub(crate) fn handle(args: cli::RulesArgs, global: &cli::GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let map = load_rule_map(config.as_ref(), args.rule_map.as_deref())?;

    let rendered = match args.format {
        RulesFormat::Text => render_text(&map),
        RulesFormat::Json => {
            let mut s = serde_json::to_string_pretty(&map)?;
            s.push('\n');
            s
        }
        RulesFormat::Toml => map.to_toml().context("Failed to serialize rule map as TOML")?,
    };

    std::io::stdout().lock().write_all(rendered.as_bytes())?;
    Ok(())
}

fn render_text(map: &RuleMap) -> String {
    let mut s = String::new();

    let width = map.overrides.keys().map(String::len).max().unwrap_or(0);
    let _ = writeln!(s, "Overrides:");
    if map.overrides.is_empty() {
        let _ = writeln!(s, "  (none)");
    }
    for (code, rule_id) in &map.overrides {
        let _ = writeln!(s, "  {code:<width$}  -> {rule_id}");
    }

    let width = map.namespaces.keys().map(String::len).max().unwrap_or(0);
    let _ = writeln!(s, "Namespaces:");
    if map.namespaces.is_empty() {
        let _ = writeln!(s, "  (none)");
    }
    for (ns, target) in &map.namespaces {
        let target = match target {
            NamespaceTarget::Prefix(p) if p.is_empty() => "(ESLint core)".to_string(),
            NamespaceTarget::Prefix(p) => format!("{p}<rule>"),
            NamespaceTarget::NoEquivalent => "(no ESLint equivalent)".to_string(),
        };
        let _ = writeln!(s, "  {ns:<width$}  -> {target}");
    }
    s
}
