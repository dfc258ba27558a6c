//! Reconciliation of two violation streams.

use std::collections::BTreeSet;

use lintparity_normalize::parse_source_code;
use lintparity_types::{ComparisonReport, SCHEMA_VERSION, Violation};

use crate::index::FileIndex;

/// Compare ESLint findings against normalized Oxlint findings.
///
/// # Arguments
/// * `eslint` - ESLint violations, already in canonical rule ids
/// * `oxlint` - Oxlint violations, normalized with unmappable codes dropped
/// * `excluded` - rules Oxlint does not implement; removed from `eslint` first
/// * `ported_rules_count` - passed through into the report unchanged
///
/// A finding matches only when file, line, column and rule are all equal.
/// Empty or disjoint inputs are valid and never fail.
///
/// # Panics
/// In debug builds, if any `oxlint` rule id still has the Oxlint
/// `namespace(rule-name)` shape. Callers must normalize first.
pub fn reconcile(
    eslint: &[Violation],
    oxlint: &[Violation],
    excluded: &BTreeSet<String>,
    ported_rules_count: usize,
) -> ComparisonReport {
    debug_assert!(
        oxlint.iter().all(|v| parse_source_code(&v.rule_id).is_none()),
        "oxlint violations must be normalized to ESLint rule ids before reconciliation"
    );

    let filtered: Vec<&Violation> = eslint
        .iter()
        .filter(|v| !excluded.contains(&v.rule_id))
        .collect();

    let oxlint_index = FileIndex::build(oxlint);
    let eslint_index = FileIndex::build(filtered.iter().copied());

    let only_in_eslint = only_in(filtered.iter().copied(), &oxlint_index);
    let only_in_oxlint = only_in(oxlint, &eslint_index);

    let eslint_total = filtered.len();
    let matched_count = eslint_total - only_in_eslint.len();

    tracing::debug!(
        eslint_total,
        oxlint_total = oxlint.len(),
        matched_count,
        only_in_eslint = only_in_eslint.len(),
        only_in_oxlint = only_in_oxlint.len(),
        excluded = excluded.len(),
        "reconciled violation streams"
    );

    ComparisonReport {
        schema_version: SCHEMA_VERSION,
        eslint_total,
        oxlint_total: oxlint.len(),
        only_in_eslint,
        only_in_oxlint,
        matched_count,
        unsupported_rules: excluded.iter().cloned().collect(),
        ported_rules_count,
    }
}

/// [`reconcile`] for callers holding the excluded rules in any collection.
pub fn reconcile_with<I, S>(
    eslint: &[Violation],
    oxlint: &[Violation],
    excluded: I,
    ported_rules_count: usize,
) -> ComparisonReport
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let excluded: BTreeSet<String> = excluded.into_iter().map(Into::into).collect();
    reconcile(eslint, oxlint, &excluded, ported_rules_count)
}

/// Violations from `primary` with no identical finding in `other`.
///
/// Both directions go through here so the matching policy stays the same.
fn only_in<'a, I>(primary: I, other: &FileIndex<'_>) -> Vec<Violation>
where
    I: IntoIterator<Item = &'a Violation>,
{
    primary
        .into_iter()
        .filter(|v| !other.contains(v))
        .cloned()
        .collect()
}
