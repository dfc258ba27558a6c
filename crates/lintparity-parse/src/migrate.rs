//! Results of `@oxlint/migrate`: unsupported rules and the generated config.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::error::ParseError;

const SECTION_MARKERS: &[&str] = &["unsupported", "not supported", "cannot migrate"];

/// Extract unsupported rule ids from `@oxlint/migrate --details` output.
///
/// Once any line mentions an unsupported section, every following bullet
/// item shaped like `plugin/rule` or `@scope/plugin/rule` is collected.
/// Results are deduplicated in first-seen order.
///
/// # Examples
///
/// ```
/// use lintparity_parse::parse_migration_details;
///
/// let out = "Unsupported rules:\n  - @typescript-eslint/no-floating-promises\n  - import/no-cycle\n";
/// assert_eq!(
///     parse_migration_details(out),
///     vec!["@typescript-eslint/no-floating-promises", "import/no-cycle"]
/// );
/// ```
#[must_use]
pub fn parse_migration_details(output: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut rules = Vec::new();
    let mut in_section = false;

    for line in output.lines() {
        let lower = line.to_lowercase();
        if SECTION_MARKERS.iter().any(|m| lower.contains(m)) {
            in_section = true;
        }
        if !in_section {
            continue;
        }
        if let Some(rule) = bullet_rule(line)
            && seen.insert(rule.to_string())
        {
            rules.push(rule.to_string());
        }
    }

    rules
}

/// The first `- rule/id` style bullet item on a line.
fn bullet_rule(line: &str) -> Option<&str> {
    line.char_indices()
        .filter(|&(_, c)| matches!(c, '-' | '•' | '*'))
        .find_map(|(i, c)| rule_after_bullet(&line[i + c.len_utf8()..]))
}

/// Bullet must be followed by whitespace, then a rule id with at least one `/`.
fn rule_after_bullet(rest: &str) -> Option<&str> {
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        return None;
    }

    let first = trimmed.chars().next()?;
    if !(first == '@' || is_word(first)) {
        return None;
    }

    let run_len = trimmed
        .char_indices()
        .find(|&(_, c)| !(is_word(c) || matches!(c, '/' | '@' | '-')))
        .map_or(trimmed.len(), |(i, _)| i);
    let run = &trimmed[..run_len];

    // Last `/` (not the first character) that is followed by a rule name.
    run.char_indices()
        .rev()
        .filter(|&(i, c)| c == '/' && i > 0)
        .find_map(|(slash, _)| {
            let tail = &run[slash + 1..];
            let name_len = tail
                .char_indices()
                .find(|&(_, c)| !(is_word(c) || c == '-'))
                .map_or(tail.len(), |(i, _)| i);
            (name_len > 0).then(|| &run[..slash + 1 + name_len])
        })
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Count rules enabled in a migrated `.oxlintrc.json`.
///
/// Looks at the top-level `rules` table and every `overrides[].rules` table.
/// A rule counts once if any table enables it with a severity other than
/// `"off"` or `0`.
pub fn count_ported_rules(json: &str) -> Result<usize, ParseError> {
    const CONFIG: &str = "Oxlint config";

    let doc: Value = serde_json::from_str(json.trim()).map_err(ParseError::json(CONFIG))?;
    let Some(root) = doc.as_object() else {
        return Err(ParseError::NotAnObject(CONFIG));
    };

    let mut enabled: BTreeSet<&str> = BTreeSet::new();
    let mut tables: Vec<&Value> = root.get("rules").into_iter().collect();
    if let Some(overrides) = root.get("overrides").and_then(Value::as_array) {
        tables.extend(overrides.iter().filter_map(|o| o.get("rules")));
    }

    for table in tables.into_iter().filter_map(Value::as_object) {
        enabled.extend(
            table
                .iter()
                .filter(|(_, severity)| is_enabled(severity))
                .map(|(name, _)| name.as_str()),
        );
    }

    Ok(enabled.len())
}

/// `"off"`/`0`, or an array whose first entry is one of those, is disabled.
fn is_enabled(severity: &Value) -> bool {
    match severity {
        Value::String(s) => !s.eq_ignore_ascii_case("off"),
        Value::Number(n) => n.as_u64() != Some(0),
        Value::Array(items) => items.first().is_some_and(is_enabled),
        Value::Bool(b) => *b,
        _ => false,
    }
}
