//! Oxlint `--format json` output.

use std::collections::BTreeMap;
use std::path::Path;

use lintparity_normalize::{Normalizer, Outcome};
use lintparity_types::Violation;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::path::repo_relative;

const TOOL: &str = "Oxlint";

#[derive(Debug, Deserialize)]
struct OxlintDiagnostic {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    labels: Vec<OxlintLabel>,
}

#[derive(Debug, Deserialize)]
struct OxlintLabel {
    #[serde(default)]
    span: Option<OxlintSpan>,
}

/// Oxlint spans carry 1-based line and column.
#[derive(Debug, Deserialize)]
struct OxlintSpan {
    line: u32,
    column: u32,
}

/// Violations read from Oxlint output plus what had to be left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OxlintParse {
    /// Normalized to ESLint rule ids; safe to reconcile.
    pub violations: Vec<Violation>,
    /// Unmappable codes and how often each occurred.
    pub unmapped: BTreeMap<String, usize>,
    /// Diagnostics missing a code, filename or location.
    pub skipped: usize,
}

/// Read Oxlint JSON output, normalizing every code through `normalizer`.
///
/// Blank input or a document without a `diagnostics` array yields nothing.
/// Unmappable codes never reach [`OxlintParse::violations`].
pub fn parse_oxlint(
    json: &str,
    repo_root: &Path,
    normalizer: &Normalizer,
) -> Result<OxlintParse, ParseError> {
    let raw = json.trim();
    if raw.is_empty() {
        return Ok(OxlintParse::default());
    }

    let doc: Value = serde_json::from_str(raw).map_err(ParseError::json(TOOL))?;
    let Some(diagnostics) = doc.get("diagnostics").and_then(Value::as_array) else {
        return Ok(OxlintParse::default());
    };

    let mut out = OxlintParse::default();

    for entry in diagnostics {
        let diagnostic: OxlintDiagnostic = match OxlintDiagnostic::deserialize(entry) {
            Ok(d) => d,
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable Oxlint diagnostic");
                out.skipped += 1;
                continue;
            }
        };

        let (Some(code), Some(filename)) = (diagnostic.code, diagnostic.filename) else {
            out.skipped += 1;
            continue;
        };
        if code.is_empty() || filename.is_empty() {
            out.skipped += 1;
            continue;
        }

        let Some(span) = diagnostic.labels.into_iter().next().and_then(|l| l.span) else {
            out.skipped += 1;
            continue;
        };

        match normalizer.classify(&code) {
            Outcome::Mapped { rule_id } => out.violations.push(Violation {
                file_path: repo_relative(&filename, repo_root),
                line: span.line,
                column: span.column,
                rule_id,
            }),
            _ => *out.unmapped.entry(code).or_default() += 1,
        }
    }

    if !out.unmapped.is_empty() {
        tracing::warn!(
            count = out.unmapped.len(),
            "{} unmapped Oxlint rule(s) skipped",
            out.unmapped.len()
        );
        for (code, occurrences) in &out.unmapped {
            tracing::warn!(
                code = %code,
                occurrences,
                outcome = normalizer.classify(code).label(),
                "unmapped Oxlint rule"
            );
        }
    }

    Ok(out)
}
