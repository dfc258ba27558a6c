//! # lintparity-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the data structures shared by every `lintparity` crate:
//! the normalized [`Violation`] record, its per-file matching key, and the
//! [`ComparisonReport`] produced by reconciliation.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: the JSON shape of [`ComparisonReport`] is the
//! contract. Removed or renamed fields bump [`SCHEMA_VERSION`].
//!
//! ## What belongs here
//! * Pure data structs (Violation, ComparisonReport, ToolVersions)
//! * Serialization/Deserialization logic
//! * Stability markers (SCHEMA_VERSION)
//!
//! ## What does NOT belong here
//! * File I/O
//! * Rule normalization or matching logic
//! * CLI argument parsing

use std::fmt;

use serde::{Deserialize, Serialize};

/// The current schema version for serialized comparison reports.
pub const SCHEMA_VERSION: u32 = 1;

/// One diagnostic finding, reduced to its comparable shape.
///
/// `file_path` is relative to the repository root and uses `/` separators.
/// `line` and `column` are 1-based. `rule_id` is always in the canonical
/// (ESLint) naming convention, whichever tool produced the finding.
///
/// Two violations are the same finding iff all four fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Violation {
    pub file_path: String,
    pub line: u32,
    pub column: u32,
    pub rule_id: String,
}

impl Violation {
    pub fn new(
        file_path: impl Into<String>,
        line: u32,
        column: u32,
        rule_id: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            column,
            rule_id: rule_id.into(),
        }
    }

    /// The matching key within one file.
    #[must_use]
    pub fn key(&self) -> ViolationKey<'_> {
        ViolationKey {
            line: self.line,
            column: self.column,
            rule_id: &self.rule_id,
        }
    }

    /// `file:line:column`, as editors and terminals expect it.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.file_path, self.line, self.column)
    }
}

/// The `(line, column, rule)` part of a violation's identity.
///
/// Only meaningful when scoped to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViolationKey<'a> {
    pub line: u32,
    pub column: u32,
    pub rule_id: &'a str,
}

impl fmt::Display for ViolationKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.line, self.column, self.rule_id)
    }
}

/// Result of reconciling ESLint findings against Oxlint findings.
///
/// Built once per run by the reconciliation engine and never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub schema_version: u32,
    /// ESLint findings left after unsupported rules are excluded.
    pub eslint_total: usize,
    pub oxlint_total: usize,
    pub only_in_eslint: Vec<Violation>,
    pub only_in_oxlint: Vec<Violation>,
    pub matched_count: usize,
    /// Rules excluded from comparison, sorted and deduplicated.
    pub unsupported_rules: Vec<String>,
    pub ported_rules_count: usize,
}

impl ComparisonReport {
    /// Fraction of ESLint findings that Oxlint reproduced, in `0.0..=1.0`.
    ///
    /// `None` when ESLint reported nothing comparable.
    #[must_use]
    pub fn match_rate(&self) -> Option<f64> {
        ratio(self.matched_count, self.eslint_total)
    }

    /// Ported plus unsupported rules.
    #[must_use]
    pub fn total_rules(&self) -> usize {
        self.ported_rules_count + self.unsupported_rules.len()
    }

    /// Fraction of rules the migration activated, in `0.0..=1.0`.
    #[must_use]
    pub fn ported_rate(&self) -> Option<f64> {
        ratio(self.ported_rules_count, self.total_rules())
    }
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

/// How a comparison report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Plain text for terminals and CI logs.
    #[default]
    Text,
    /// Markdown tables for PR comments.
    Md,
    /// Pretty-printed JSON envelope.
    Json,
}

/// Name and version of the tool that produced an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Versions of the two linters, as reported by their installed packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolVersions {
    pub eslint: String,
    pub oxlint: String,
    /// Only present for type-aware runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oxlint_tsgolint: Option<String>,
}

impl Default for ToolVersions {
    fn default() -> Self {
        Self {
            eslint: "unknown".to_string(),
            oxlint: "unknown".to_string(),
            oxlint_tsgolint: None,
        }
    }
}

impl fmt::Display for ToolVersions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ESLint {}, Oxlint {}", self.eslint, self.oxlint)?;
        if let Some(tsgolint) = &self.oxlint_tsgolint {
            write!(f, ", oxlint-tsgolint {tsgolint}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(matched: usize, total: usize, ported: usize, unsupported: usize) -> ComparisonReport {
        ComparisonReport {
            schema_version: SCHEMA_VERSION,
            eslint_total: total,
            oxlint_total: 0,
            only_in_eslint: vec![],
            only_in_oxlint: vec![],
            matched_count: matched,
            unsupported_rules: (0..unsupported).map(|i| format!("plugin/rule-{i}")).collect(),
            ported_rules_count: ported,
        }
    }

    #[test]
    fn key_display_is_line_column_rule() {
        let v = Violation::new("src/a.ts", 3, 7, "no-debugger");
        assert_eq!(v.key().to_string(), "3:7:no-debugger");
    }

    #[test]
    fn key_ignores_file_path() {
        let a = Violation::new("a.ts", 1, 1, "no-unused-vars");
        let b = Violation::new("b.ts", 1, 1, "no-unused-vars");
        assert_eq!(a.key(), b.key());
        assert_ne!(a, b);
    }

    #[test]
    fn location_formats_file_line_column() {
        let v = Violation::new("src/a.ts", 12, 4, "eqeqeq");
        assert_eq!(v.location(), "src/a.ts:12:4");
    }

    #[test]
    fn violations_order_by_file_then_position() {
        let mut vs = vec![
            Violation::new("b.ts", 1, 1, "x"),
            Violation::new("a.ts", 2, 1, "x"),
            Violation::new("a.ts", 1, 9, "x"),
        ];
        vs.sort();
        assert_eq!(vs[0].location(), "a.ts:1:9");
        assert_eq!(vs[1].location(), "a.ts:2:1");
        assert_eq!(vs[2].location(), "b.ts:1:1");
    }

    #[test]
    fn match_rate_none_when_no_eslint_findings() {
        assert_eq!(report(0, 0, 0, 0).match_rate(), None);
    }

    #[test]
    fn match_rate_is_matched_over_total() {
        assert_eq!(report(3, 4, 0, 0).match_rate(), Some(0.75));
    }

    #[test]
    fn ported_rate_counts_unsupported_in_denominator() {
        let r = report(0, 0, 3, 1);
        assert_eq!(r.total_rules(), 4);
        assert_eq!(r.ported_rate(), Some(0.75));
    }

    #[test]
    fn ported_rate_none_without_rules() {
        assert_eq!(report(0, 0, 0, 0).ported_rate(), None);
    }

    #[test]
    fn tool_versions_display_includes_tsgolint_when_present() {
        let mut v = ToolVersions {
            eslint: "9.1.0".into(),
            oxlint: "1.2.0".into(),
            oxlint_tsgolint: None,
        };
        assert_eq!(v.to_string(), "ESLint 9.1.0, Oxlint 1.2.0");
        v.oxlint_tsgolint = Some("0.1.0".into());
        assert_eq!(
            v.to_string(),
            "ESLint 9.1.0, Oxlint 1.2.0, oxlint-tsgolint 0.1.0"
        );
    }

    #[test]
    fn report_format_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&ReportFormat::Md).unwrap(), "\"md\"");
        assert_eq!(ReportFormat::default(), ReportFormat::Text);
    }

    #[test]
    fn report_serializes_snake_case_keys() {
        let json = serde_json::to_value(report(1, 1, 2, 0)).unwrap();
        assert_eq!(json["eslint_total"], 1);
        assert_eq!(json["matched_count"], 1);
        assert_eq!(json["ported_rules_count"], 2);
        assert!(json["only_in_eslint"].as_array().unwrap().is_empty());
    }
}
