//! Handler for the `lintparity compare` command.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lintparity_config::{self as cli, UserConfig, resolve_compare};
use lintparity_format::{RenderOptions, write_report};
use lintparity_normalize::Normalizer;
use lintparity_parse::{count_ported_rules, parse_eslint, parse_migration_details, parse_oxlint};
use lintparity_reconcile::reconcile;
use lintparity_types::{ComparisonReport, ToolVersions};

use super::{load_config, load_rule_map};

/// Exit code when the match rate is below `--fail-under`.
const EXIT_BELOW_THRESHOLD: i32 = 2;

/// Handle the compare command.
pub(crate) fn handle(args: cli::CompareArgs, global: &cli::GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let settings = resolve_compare(&args, config.as_ref());
    let normalizer = Normalizer::new(load_rule_map(config.as_ref(), args.rule_map.as_deref())?);
    let repo_root = resolve_repo_root(&args.repo_root)?;

    let eslint_json = read_input(&args.eslint, "ESLint output")?;
    let eslint = parse_eslint(&eslint_json, &repo_root)
        .with_context(|| format!("Invalid ESLint output in {}", args.eslint.display()))?;
    tracing::info!("ESLint: {} total violations", eslint.len());

    let oxlint_json = read_input(&args.oxlint, "Oxlint output")?;
    let oxlint = parse_oxlint(&oxlint_json, &repo_root, &normalizer)
        .with_context(|| format!("Invalid Oxlint output in {}", args.oxlint.display()))?;
    tracing::info!(
        "Oxlint: {} total violations ({} unmappable, {} without location)",
        oxlint.violations.len(),
        oxlint.unmapped.values().sum::<usize>(),
        oxlint.skipped
    );

    let unsupported = collect_unsupported(&args, config.as_ref())?;
    let ported = ported_rules(&args)?;

    let report = reconcile(&eslint, &oxlint.violations, &unsupported, ported);
    tracing::info!(
        "matched {} of {} ESLint violations",
        report.matched_count,
        report.eslint_total
    );

    let opts = RenderOptions {
        repository: args.repository.clone(),
        versions: ToolVersions {
            eslint: args.eslint_version.clone().unwrap_or_else(unknown),
            oxlint: args.oxlint_version.clone().unwrap_or_else(unknown),
            oxlint_tsgolint: args.tsgolint_version.clone(),
        },
        unsupported_limit: settings.unsupported_limit,
        violation_limit: settings.violation_limit,
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_report(&mut out, &report, settings.format, &opts)?;
            out.flush()
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
        }
        None => {
            let mut out = std::io::stdout().lock();
            write_report(&mut out, &report, settings.format, &opts)?;
            out.flush()?;
        }
    }

    if let Some(threshold) = settings.fail_under
        && below_threshold(&report, threshold)
    {
        eprintln!(
            "Match rate {} is below --fail-under {threshold}%",
            lintparity_format::format_pct(report.match_rate())
        );
        std::process::exit(EXIT_BELOW_THRESHOLD);
    }

    Ok(())
}

fn unknown() -> String {
    "unknown".to_string()
}

fn read_input(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {what} from {}", path.display()))
}

fn resolve_repo_root(root: &Path) -> Result<PathBuf> {
    std::path::absolute(root)
        .with_context(|| format!("Failed to resolve repository root {}", root.display()))
}

/// Union of `--unsupported`, `--unsupported-file`, `--migration-log` and the
/// config file's `compare.unsupported`.
fn collect_unsupported(args: &cli::CompareArgs, config: Option<&UserConfig>) -> Result<BTreeSet<String>> {
    let mut rules: BTreeSet<String> = args.unsupported.iter().cloned().collect();

    if let Some(config) = config {
        rules.extend(config.compare.unsupported.iter().cloned());
    }

    if let Some(path) = &args.unsupported_file {
        let text = read_input(path, "unsupported rule list")?;
        rules.extend(parse_rule_list(&text));
    }

    if let Some(path) = &args.migration_log {
        let text = read_input(path, "migration log")?;
        let found = parse_migration_details(&text);
        tracing::info!("{} unsupported rules found in migration log", found.len());
        rules.extend(found);
    }

    Ok(rules)
}

/// One rule per line; blank lines and `#` comments are ignored.
fn parse_rule_list(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

fn ported_rules(args: &cli::CompareArgs) -> Result<usize> {
    if let Some(count) = args.ported_count {
        return Ok(count);
    }
    let Some(path) = &args.oxlintrc else {
        tracing::debug!("no ported rule count given; using 0");
        return Ok(0);
    };
    let json = read_input(path, "Oxlint config")?;
    count_ported_rules(&json)
        .with_context(|| format!("Invalid Oxlint config in {}", path.display()))
}

/// `true` only when there was something to match and too little of it did.
fn below_threshold(report: &ComparisonReport, threshold: f64) -> bool {
    report
        .match_rate()
        .is_some_and(|rate| rate * 100.0 < threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintparity_types::{SCHEMA_VERSION, Violation};

    fn report(matched: usize, total: usize) -> ComparisonReport {
        ComparisonReport {
            schema_version: SCHEMA_VERSION,
            eslint_total: total,
            oxlint_total: matched,
            only_in_eslint: (matched..total)
                .map(|i| Violation::new("a.ts", i as u32 + 1, 1, "eqeqeq"))
                .collect(),
            only_in_oxlint: vec![],
            matched_count: matched,
            unsupported_rules: vec![],
            ported_rules_count: 0,
        }
    }

    #[test]
    fn rule_list_skips_blanks_and_comments() {
        let text = "# header\nimport/no-cycle\n\n  jsdoc/require-param  # flaky\n";
        let rules: Vec<String> = parse_rule_list(text).collect();
        assert_eq!(rules, vec!["import/no-cycle", "jsdoc/require-param"]);
    }

    #[test]
    fn threshold_compares_percentages() {
        assert!(below_threshold(&report(1, 2), 60.0));
        assert!(!below_threshold(&report(1, 2), 50.0));
    }

    #[test]
    fn threshold_ignores_empty_eslint_run() {
        assert!(!below_threshold(&report(0, 0), 100.0));
    }

    #[test]
    fn unsupported_merges_flags_and_config() {
        let args = cli::CompareArgs {
            unsupported: vec!["b/rule".into(), "a/rule".into()],
            ..Default::default()
        };
        let config = UserConfig {
            compare: cli::CompareDefaults {
                unsupported: vec!["a/rule".into(), "c/rule".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        let rules = collect_unsupported(&args, Some(&config)).unwrap();
        assert_eq!(
            rules.into_iter().collect::<Vec<_>>(),
            vec!["a/rule", "b/rule", "c/rule"]
        );
    }

    #[test]
    fn ported_defaults_to_zero() {
        assert_eq!(ported_rules(&cli::CompareArgs::default()).unwrap(), 0);
    }

    #[test]
    fn ported_count_flag_wins() {
        let args = cli::CompareArgs {
            ported_count: Some(7),
            ..Default::default()
        };
        assert_eq!(ported_rules(&args).unwrap(), 7);
    }
}
