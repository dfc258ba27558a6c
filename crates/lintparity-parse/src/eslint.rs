//! ESLint `--format json` output.

use std::path::Path;

use lintparity_types::Violation;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::path::repo_relative;

const TOOL: &str = "ESLint";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EslintFileResult {
    file_path: String,
    #[serde(default)]
    messages: Vec<EslintMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EslintMessage {
    #[serde(default)]
    rule_id: Option<String>,
    #[serde(default)]
    line: Option<u32>,
    #[serde(default)]
    column: Option<u32>,
}

/// Read ESLint JSON results into violations.
///
/// Blank input means ESLint produced nothing and yields no violations.
/// Messages without a rule id (parse errors, ignored-file notices) are
/// dropped: they are neither matched nor reported. Rule messages without a
/// position cannot be matched and are dropped too.
pub fn parse_eslint(json: &str, repo_root: &Path) -> Result<Vec<Violation>, ParseError> {
    let raw = json.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let doc: Value = serde_json::from_str(raw).map_err(ParseError::json(TOOL))?;
    if !doc.is_array() {
        return Err(ParseError::NotAnArray(TOOL));
    }
    let results: Vec<EslintFileResult> =
        serde_json::from_value(doc).map_err(ParseError::json(TOOL))?;

    let mut violations = Vec::new();
    let mut without_rule = 0usize;
    let mut without_position = 0usize;

    for file in results {
        let rel_path = repo_relative(&file.file_path, repo_root);
        for msg in file.messages {
            let Some(rule_id) = msg.rule_id.filter(|r| !r.is_empty()) else {
                without_rule += 1;
                continue;
            };
            let (Some(line), Some(column)) = (msg.line, msg.column) else {
                without_position += 1;
                continue;
            };
            violations.push(Violation {
                file_path: rel_path.clone(),
                line,
                column,
                rule_id,
            });
        }
    }

    if without_rule > 0 {
        tracing::debug!(count = without_rule, "skipped ESLint messages without a rule id");
    }
    if without_position > 0 {
        tracing::debug!(count = without_position, "skipped ESLint messages without a position");
    }

    Ok(violations)
}
