//! Handler for the `lintparity normalize` command.

use std::io::Write;

use anyhow::Result;
use lintparity_config::{self as cli, LookupFormat};
use lintparity_normalize::{Normalizer, Outcome};
use serde::Serialize;

use super::{load_config, load_rule_map};

#[derive(Debug, Serialize)]
struct Lookup<'a> {
    code: &'a str,
    #[serde(flatten)]
    outcome: Outcome,
}

pub(crate) fn handle(args: cli::NormalizeArgs, global: &cli::GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let normalizer = Normalizer::new(load_rule_map(config.as_ref(), args.rule_map.as_deref())?);

    let lookups: Vec<Lookup<'_>> = args
        .codes
        .iter()
        .map(|code| Lookup {
            code,
            outcome: normalizer.classify(code),
        })
        .collect();

    let mut out = std::io::stdout().lock();
    match args.format {
        LookupFormat::Text => {
            for lookup in &lookups {
                writeln!(out, "{}", text_line(lookup))?;
            }
        }
        LookupFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&lookups)?)?;
        }
    }
    Ok(())
}

fn text_line(lookup: &Lookup<'_>) -> String {
    match &lookup.outcome {
        Outcome::Mapped { rule_id } => format!("{} -> {rule_id}", lookup.code),
        Outcome::NoEquivalent { namespace } => {
            format!("{} -> (no ESLint equivalent for '{namespace}')", lookup.code)
        }
        Outcome::UnknownNamespace { namespace } => {
            format!("{} -> (unknown namespace '{namespace}')", lookup.code)
        }
        Outcome::Malformed => format!("{} -> (not an Oxlint rule code)", lookup.code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(code: &str) -> String {
        let normalizer = Normalizer::builtin();
        text_line(&Lookup {
            code,
            outcome: normalizer.classify(code),
        })
    }

    #[test]
    fn mapped_code_shows_rule_id() {
        assert_eq!(
            line("typescript(no-explicit-any)"),
            "typescript(no-explicit-any) -> @typescript-eslint/no-explicit-any"
        );
    }

    #[test]
    fn unmappable_codes_explain_why() {
        assert_eq!(
            line("oxc(no-const-enum)"),
            "oxc(no-const-enum) -> (no ESLint equivalent for 'oxc')"
        );
        assert_eq!(
            line("storybook(x)"),
            "storybook(x) -> (unknown namespace 'storybook')"
        );
        assert_eq!(line("no-debugger"), "no-debugger -> (not an Oxlint rule code)");
    }

    #[test]
    fn json_flattens_outcome_next_to_code() {
        let lookup = Lookup {
            code: "eslint(eqeqeq)",
            outcome: Normalizer::builtin().classify("eslint(eqeqeq)"),
        };
        let value = serde_json::to_value(&lookup).unwrap();
        assert_eq!(value["code"], "eslint(eqeqeq)");
        assert_eq!(value["outcome"], "mapped");
        assert_eq!(value["rule_id"], "eqeqeq");
    }
}
