//! # lintparity-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and the `lintparity.toml`
//! configuration file.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//! * Default values and precedence between flags and file settings
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations (except config file parsing)

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use lintparity_normalize::{RuleMap, RuleMapError};
pub use lintparity_types::ReportFormat;

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "lintparity.toml";

/// Default cap on listed unsupported rules.
pub const DEFAULT_UNSUPPORTED_LIMIT: usize = 20;

/// `lintparity`: measure how faithfully Oxlint reproduces ESLint findings
/// after a rule-set migration.
#[derive(Parser, Debug)]
#[command(name = "lintparity", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to a lintparity.toml (default: ./lintparity.toml if present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). Overridden by LINTPARITY_LOG.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Reconcile ESLint and Oxlint JSON output and report the differences.
    Compare(CompareArgs),

    /// Show how Oxlint rule codes map onto ESLint rule ids.
    Normalize(NormalizeArgs),

    /// Print the effective rule map (builtin plus configured layers).
    Rules(RulesArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CompareArgs {
    /// ESLint `--format json` output.
    #[arg(long, value_name = "PATH")]
    pub eslint: PathBuf,

    /// Oxlint `--format json` output.
    #[arg(long, value_name = "PATH")]
    pub oxlint: PathBuf,

    /// Repository root that absolute paths in both outputs are relative to.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub repo_root: PathBuf,

    /// Rule Oxlint does not support; excluded from comparison. Repeatable.
    #[arg(long = "unsupported", value_name = "RULE")]
    pub unsupported: Vec<String>,

    /// File listing unsupported rules, one per line (`#` starts a comment).
    #[arg(long, value_name = "PATH")]
    pub unsupported_file: Option<PathBuf>,

    /// Captured `@oxlint/migrate --details` output to read unsupported rules from.
    #[arg(long, value_name = "PATH")]
    pub migration_log: Option<PathBuf>,

    /// Number of rules the migration activated.
    #[arg(long, value_name = "N", conflicts_with = "oxlintrc")]
    pub ported_count: Option<usize>,

    /// Migrated `.oxlintrc.json` to count activated rules from.
    #[arg(long, value_name = "PATH")]
    pub oxlintrc: Option<PathBuf>,

    /// Extra rule map (TOML) layered over the builtin one.
    #[arg(long, value_name = "PATH")]
    pub rule_map: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Label for the compared repository (e.g. its URL).
    #[arg(long, value_name = "LABEL")]
    pub repository: Option<String>,

    /// ESLint version shown in the report.
    #[arg(long, value_name = "VERSION")]
    pub eslint_version: Option<String>,

    /// Oxlint version shown in the report.
    #[arg(long, value_name = "VERSION")]
    pub oxlint_version: Option<String>,

    /// oxlint-tsgolint version, for type-aware runs.
    #[arg(long, value_name = "VERSION")]
    pub tsgolint_version: Option<String>,

    /// Max violations listed per section (0 = all).
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Write the report here instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Exit with code 2 when the match rate (percent) is below this value.
    #[arg(long, value_name = "PCT")]
    pub fail_under: Option<f64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct NormalizeArgs {
    /// Oxlint rule codes, e.g. `react(exhaustive-deps)`.
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,

    /// Extra rule map (TOML) layered over the builtin one.
    #[arg(long, value_name = "PATH")]
    pub rule_map: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = LookupFormat::Text)]
    pub format: LookupFormat,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RulesArgs {
    /// Extra rule map (TOML) layered over the builtin one.
    #[arg(long, value_name = "PATH")]
    pub rule_map: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = RulesFormat::Text)]
    pub format: RulesFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LookupFormat {
    /// One line per code.
    #[default]
    Text,
    /// JSON array of outcomes.
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RulesFormat {
    /// Aligned table.
    #[default]
    Text,
    /// JSON object.
    Json,
    /// TOML, loadable with `--rule-map`.
    Toml,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}

// ---------------------------------------------------------------------------
// Configuration file
// ---------------------------------------------------------------------------

/// Errors from loading `lintparity.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config TOML {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid [rules] section in {path}: {source}")]
    Rules {
        path: PathBuf,
        #[source]
        source: RuleMapError,
    },
}

/// Contents of `lintparity.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub compare: CompareDefaults,
    /// Rule map layered over the builtin one.
    pub rules: RuleMap,
}

/// `[compare]` defaults; flags on the command line win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareDefaults {
    pub format: Option<ReportFormat>,
    pub unsupported_limit: Option<usize>,
    pub violation_limit: Option<usize>,
    pub fail_under: Option<f64>,
    /// Rules always excluded, in addition to those passed per run.
    pub unsupported: Vec<String>,
}

impl UserConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.rules.validate().map_err(|source| ConfigError::Rules {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Load the config named by `--config`, else `./lintparity.toml` if it exists.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Option<Self>, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path).map(Some);
        }
        let candidate = cwd.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::from_file(&candidate).map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Settings for one `compare` run after flags and config are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCompare {
    pub format: ReportFormat,
    pub unsupported_limit: usize,
    pub violation_limit: usize,
    pub fail_under: Option<f64>,
}

/// Merge `compare` flags with config defaults. Flags win.
#[must_use]
pub fn resolve_compare(args: &CompareArgs, config: Option<&UserConfig>) -> ResolvedCompare {
    let defaults = config.map(|c| &c.compare);
    ResolvedCompare {
        format: args
            .format
            .or_else(|| defaults.and_then(|d| d.format))
            .unwrap_or_default(),
        unsupported_limit: defaults
            .and_then(|d| d.unsupported_limit)
            .unwrap_or(DEFAULT_UNSUPPORTED_LIMIT),
        violation_limit: args
            .limit
            .or_else(|| defaults.and_then(|d| d.violation_limit))
            .unwrap_or(0),
        fail_under: args.fail_under.or_else(|| defaults.and_then(|d| d.fail_under)),
    }
}

/// Builtin map, then the config file's `[rules]`, then `--rule-map`.
pub fn effective_rule_map(
    config: Option<&UserConfig>,
    rule_map: Option<&Path>,
) -> Result<RuleMap, RuleMapError> {
    let mut map = RuleMap::builtin();
    if let Some(config) = config {
        map = map.merged_with(config.rules.clone());
    }
    if let Some(path) = rule_map {
        map = map.merged_with(RuleMap::from_file(path)?);
    }
    Ok(map)
}
