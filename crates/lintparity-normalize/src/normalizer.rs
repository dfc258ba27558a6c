//! Oxlint code → ESLint rule id resolution.

use serde::Serialize;

use crate::code::parse_source_code;
use crate::map::{NamespaceTarget, RuleMap};

/// How a single Oxlint code resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Resolved to a canonical ESLint rule id.
    Mapped { rule_id: String },
    /// The namespace is known to have no ESLint counterpart.
    NoEquivalent { namespace: String },
    /// The namespace is not in the map.
    UnknownNamespace { namespace: String },
    /// Not shaped like `namespace(rule-name)`.
    Malformed,
}

impl Outcome {
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        matches!(self, Outcome::Mapped { .. })
    }

    /// Short label used in logs and text output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Mapped { .. } => "mapped",
            Outcome::NoEquivalent { .. } => "no-equivalent",
            Outcome::UnknownNamespace { .. } => "unknown-namespace",
            Outcome::Malformed => "malformed",
        }
    }
}

/// The flat normalization result: a rule id and whether it is comparable.
///
/// Unmappable codes carry the original code back as `canonical_id` so
/// callers can report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Normalized {
    pub canonical_id: String,
    pub mappable: bool,
}

/// Resolves Oxlint codes against an immutable [`RuleMap`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    map: RuleMap,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Normalizer {
    pub fn new(map: RuleMap) -> Self {
        Self { map }
    }

    /// A normalizer over [`RuleMap::builtin`].
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(RuleMap::builtin())
    }

    pub fn map(&self) -> &RuleMap {
        &self.map
    }

    /// Resolve `code` to a tagged [`Outcome`].
    ///
    /// Overrides are matched against the whole code before anything else,
    /// so they win even when the namespace would also resolve. A result
    /// that still has the `namespace(rule-name)` shape is [`Outcome::Malformed`],
    /// so [`Outcome::Mapped`] ids never read as Oxlint codes.
    pub fn classify(&self, code: &str) -> Outcome {
        match self.resolve(code) {
            Outcome::Mapped { rule_id } if parse_source_code(&rule_id).is_some() => {
                Outcome::Malformed
            }
            outcome => outcome,
        }
    }

    fn resolve(&self, code: &str) -> Outcome {
        if let Some(rule_id) = self.map.overrides.get(code) {
            return Outcome::Mapped {
                rule_id: rule_id.clone(),
            };
        }

        let Some(parsed) = parse_source_code(code) else {
            return Outcome::Malformed;
        };

        match self.map.namespaces.get(parsed.namespace) {
            None => Outcome::UnknownNamespace {
                namespace: parsed.namespace.to_string(),
            },
            Some(NamespaceTarget::NoEquivalent) => Outcome::NoEquivalent {
                namespace: parsed.namespace.to_string(),
            },
            Some(NamespaceTarget::Prefix(prefix)) => Outcome::Mapped {
                rule_id: format!("{prefix}{}", parsed.rule_name),
            },
        }
    }

    /// Resolve `code` to a canonical id, or hand it back marked unmappable.
    pub fn normalize(&self, code: &str) -> Normalized {
        match self.classify(code) {
            Outcome::Mapped { rule_id } => Normalized {
                canonical_id: rule_id,
                mappable: true,
            },
            _ => Normalized {
                canonical_id: code.to_string(),
                mappable: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(code: &str) -> Normalized {
        Normalizer::builtin().normalize(code)
    }

    fn mapped(id: &str) -> Normalized {
        Normalized {
            canonical_id: id.to_string(),
            mappable: true,
        }
    }

    fn unmapped(code: &str) -> Normalized {
        Normalized {
            canonical_id: code.to_string(),
            mappable: false,
        }
    }

    #[test]
    fn eslint_namespace_maps_to_core_rule() {
        assert_eq!(n("eslint(no-unused-vars)"), mapped("no-unused-vars"));
    }

    #[test]
    fn typescript_namespace_gets_scoped_prefix() {
        assert_eq!(
            n("typescript(no-explicit-any)"),
            mapped("@typescript-eslint/no-explicit-any")
        );
    }

    #[test]
    fn node_namespace_is_renamed_to_n() {
        assert_eq!(n("node(no-process-exit)"), mapped("n/no-process-exit"));
    }

    #[test]
    fn nextjs_namespace_maps_to_next_plugin() {
        assert_eq!(n("nextjs(no-img-element)"), mapped("@next/next/no-img-element"));
    }

    #[test]
    fn override_beats_react_namespace() {
        assert_eq!(
            n("react(exhaustive-deps)"),
            mapped("react-hooks/exhaustive-deps")
        );
        assert_eq!(n("react(rules-of-hooks)"), mapped("react-hooks/rules-of-hooks"));
        assert_eq!(n("react(jsx-key)"), mapped("react/jsx-key"));
    }

    #[test]
    fn oxc_namespace_is_unmappable() {
        assert_eq!(n("oxc(no-debugger)"), unmapped("oxc(no-debugger)"));
        assert_eq!(
            Normalizer::builtin().classify("oxc(no-debugger)"),
            Outcome::NoEquivalent {
                namespace: "oxc".into()
            }
        );
    }

    #[test]
    fn unknown_namespace_is_unmappable() {
        assert_eq!(n("storybook(no-uninstalled-addons)"), unmapped("storybook(no-uninstalled-addons)"));
        assert_eq!(
            Normalizer::builtin().classify("storybook(x)"),
            Outcome::UnknownNamespace {
                namespace: "storybook".into()
            }
        );
    }

    #[test]
    fn malformed_code_is_unmappable() {
        assert_eq!(n("no-debugger"), unmapped("no-debugger"));
        assert_eq!(n(""), unmapped(""));
        assert_eq!(Normalizer::builtin().classify("eslint("), Outcome::Malformed);
    }

    #[test]
    fn override_applies_even_to_malformed_keys() {
        let mut map = RuleMap::builtin();
        map.overrides
            .insert("legacy-code".to_string(), "legacy/rule".to_string());
        let normalizer = Normalizer::new(map);
        assert_eq!(normalizer.normalize("legacy-code"), mapped("legacy/rule"));
    }

    #[test]
    fn override_can_rehome_no_equivalent_namespace() {
        let mut map = RuleMap::builtin();
        map.overrides
            .insert("oxc(no-debugger)".to_string(), "no-debugger".to_string());
        let normalizer = Normalizer::new(map);
        assert_eq!(normalizer.normalize("oxc(no-debugger)"), mapped("no-debugger"));
        assert_eq!(normalizer.normalize("oxc(other)"), unmapped("oxc(other)"));
    }

    #[test]
    fn nested_parentheses_never_map_to_an_oxlint_shaped_id() {
        let normalizer = Normalizer::builtin();
        assert_eq!(normalizer.classify("eslint(a(b))"), Outcome::Malformed);
        assert_eq!(n("eslint(a(b))"), unmapped("eslint(a(b))"));
    }

    #[test]
    fn unvalidated_override_to_oxlint_shape_is_not_mapped() {
        let mut map = RuleMap::builtin();
        map.overrides.insert("vue(x)".to_string(), "vue(x)".to_string());
        let normalizer = Normalizer::new(map);
        assert_eq!(normalizer.classify("vue(x)"), Outcome::Malformed);
        assert_eq!(normalizer.normalize("vue(x)"), unmapped("vue(x)"));
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(Outcome::Malformed.label(), "malformed");
        assert!(Outcome::Mapped { rule_id: "x".into() }.is_mapped());
        assert!(!Outcome::Malformed.is_mapped());
    }
}
