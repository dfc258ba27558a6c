//! BDD-style scenario tests for lintparity-normalize.
//!
//! Each test reads as a Given/When/Then scenario covering overrides,
//! namespace prefixes, and the three ways a code can be unmappable.

use lintparity_normalize::{Normalized, Normalizer, Outcome, RuleMap};

// ============================================================================
// Helpers
// ============================================================================

fn with_user_map(toml: &str) -> Normalizer {
    let user = RuleMap::from_toml(toml).expect("valid rule map");
    Normalizer::new(RuleMap::builtin().merged_with(user))
}

// ============================================================================
// Scenario: overrides
// ============================================================================

#[test]
fn given_hooks_rule_under_react_namespace_when_normalized_then_lands_in_react_hooks() {
    // Given the builtin map, where `react` maps to `react/`
    let normalizer = Normalizer::builtin();
    // When normalizing the exhaustive-deps code
    let result = normalizer.normalize("react(exhaustive-deps)");
    // Then the override wins over the namespace prefix
    assert_eq!(
        result,
        Normalized {
            canonical_id: "react-hooks/exhaustive-deps".into(),
            mappable: true
        }
    );
}

#[test]
fn given_user_override_when_normalized_then_user_id_is_used() {
    let normalizer = with_user_map(
        r#"
[overrides]
"typescript(no-var-requires)" = "@typescript-eslint/no-require-imports"
"#,
    );
    let result = normalizer.normalize("typescript(no-var-requires)");
    assert_eq!(result.canonical_id, "@typescript-eslint/no-require-imports");
    assert!(result.mappable);
}

// ============================================================================
// Scenario: namespaces
// ============================================================================

#[test]
fn given_user_namespace_when_normalized_then_prefix_is_applied() {
    let normalizer = with_user_map("[namespaces]\nregexp = \"regexp/\"\n");
    let result = normalizer.normalize("regexp(no-useless-flag)");
    assert_eq!(result.canonical_id, "regexp/no-useless-flag");
    assert!(result.mappable);
}

#[test]
fn given_user_marks_namespace_false_when_normalized_then_no_equivalent() {
    let normalizer = with_user_map("[namespaces]\nunicorn = false\n");
    assert_eq!(
        normalizer.classify("unicorn(no-null)"),
        Outcome::NoEquivalent {
            namespace: "unicorn".into()
        }
    );
}

// ============================================================================
// Scenario: unmappable codes
// ============================================================================

#[test]
fn given_oxc_code_when_normalized_then_original_code_is_returned() {
    let result = Normalizer::builtin().normalize("oxc(no-debugger)");
    assert_eq!(result.canonical_id, "oxc(no-debugger)");
    assert!(!result.mappable);
}

#[test]
fn given_unrecognized_namespace_when_classified_then_distinct_from_no_equivalent() {
    let normalizer = Normalizer::builtin();
    let unknown = normalizer.classify("storybook(story-exports)");
    let no_equiv = normalizer.classify("oxc(const-comparisons)");
    assert_eq!(unknown.label(), "unknown-namespace");
    assert_eq!(no_equiv.label(), "no-equivalent");
    assert_ne!(unknown, no_equiv);
}

#[test]
fn given_bare_eslint_rule_when_normalized_then_surfaced_as_unmappable() {
    let result = Normalizer::builtin().normalize("no-unused-vars");
    assert_eq!(result.canonical_id, "no-unused-vars");
    assert!(!result.mappable);
}
