//! Property-based tests for lintparity-parse.

use std::collections::{BTreeMap, BTreeSet};

use lintparity_parse::{count_ported_rules, normalize_rel_path, parse_migration_details};
use proptest::prelude::*;

fn arb_rule() -> impl Strategy<Value = String> {
    "[a-z]{1,8}/[a-z][a-z-]{0,8}"
}

fn first_seen(rules: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    rules
        .iter()
        .filter(|r| seen.insert(r.as_str()))
        .cloned()
        .collect()
}

proptest! {
    /// Every bullet under an unsupported heading comes back once, in order.
    #[test]
    fn migration_bullets_are_collected_in_first_seen_order(
        rules in prop::collection::vec(arb_rule(), 0..12),
        bullet in prop_oneof![Just('-'), Just('*'), Just('•')],
    ) {
        let mut text = String::from("Migration summary\nUnsupported rules:\n");
        for rule in &rules {
            text.push_str(&format!("  {bullet} {rule}\n"));
        }
        prop_assert_eq!(parse_migration_details(&text), first_seen(&rules));
    }

    /// Bullets before any unsupported heading are ignored.
    #[test]
    fn migration_bullets_without_heading_are_ignored(
        rules in prop::collection::vec(arb_rule(), 0..12),
    ) {
        let mut text = String::from("Migrated rules:\n");
        for rule in &rules {
            text.push_str(&format!("  - {rule}\n"));
        }
        prop_assert!(parse_migration_details(&text).is_empty());
    }

    /// Numeric severities count when non-zero, each rule at most once.
    #[test]
    fn ported_count_matches_enabled_rules(
        top in prop::collection::btree_map(arb_rule(), 0u8..3, 0..10),
        nested in prop::collection::btree_map(arb_rule(), 0u8..3, 0..10),
    ) {
        let enabled: BTreeSet<String> = top
            .iter()
            .chain(nested.iter())
            .filter(|(_, severity)| **severity > 0)
            .map(|(rule, _)| rule.clone())
            .collect();
        let doc = serde_json::json!({
            "rules": top,
            "overrides": [{ "files": ["*.ts"], "rules": nested }],
        });
        prop_assert_eq!(count_ported_rules(&doc.to_string()).unwrap(), enabled.len());
    }

    /// Normalized paths use `/` only and never start with `./`.
    #[test]
    fn normalized_paths_use_forward_slashes(path in "(\\./)?[a-z]{1,6}([/\\\\][a-z]{1,6}){0,4}") {
        let normalized = normalize_rel_path(&path);
        prop_assert!(!normalized.contains('\\'));
        prop_assert!(!normalized.starts_with("./"));
    }
}

#[test]
fn ported_count_of_empty_maps_is_zero() {
    let empty: BTreeMap<String, u8> = BTreeMap::new();
    let doc = serde_json::json!({ "rules": empty });
    assert_eq!(count_ported_rules(&doc.to_string()).unwrap(), 0);
}
