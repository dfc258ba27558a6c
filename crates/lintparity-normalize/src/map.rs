//! Rule mapping tables and their TOML representation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::code::{is_valid_namespace, parse_source_code};

/// Errors from loading a rule map.
#[derive(Debug, Error)]
pub enum RuleMapError {
    #[error("Failed to read rule map file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse rule map TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid namespace '{0}': expected letters, digits, '_' or '-'")]
    InvalidNamespace(String),

    #[error("Invalid target '{target}' for '{key}': ESLint rule ids cannot contain '(' or ')'")]
    InvalidTarget { key: String, target: String },
}

/// Where an Oxlint namespace lands in the ESLint rule space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTarget", into = "RawTarget")]
pub enum NamespaceTarget {
    /// Canonical id is `prefix + rule_name`. An empty prefix means ESLint core.
    Prefix(String),
    /// Oxlint-specific checks with no ESLint counterpart.
    NoEquivalent,
}

impl NamespaceTarget {
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::Prefix(prefix.into())
    }
}

/// On disk a target is either a prefix string or `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawTarget {
    Prefix(String),
    Flag(bool),
}

impl TryFrom<RawTarget> for NamespaceTarget {
    type Error = String;

    fn try_from(raw: RawTarget) -> Result<Self, Self::Error> {
        match raw {
            RawTarget::Prefix(p) => Ok(NamespaceTarget::Prefix(p)),
            RawTarget::Flag(false) => Ok(NamespaceTarget::NoEquivalent),
            RawTarget::Flag(true) => {
                Err("namespace target must be a prefix string or false".to_string())
            }
        }
    }
}

impl From<NamespaceTarget> for RawTarget {
    fn from(target: NamespaceTarget) -> Self {
        match target {
            NamespaceTarget::Prefix(p) => RawTarget::Prefix(p),
            NamespaceTarget::NoEquivalent => RawTarget::Flag(false),
        }
    }
}

/// The two-layer mapping from Oxlint codes to ESLint rule ids.
///
/// `overrides` is keyed by the full Oxlint code and always wins.
/// `namespaces` is consulted only when no override exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleMap {
    pub overrides: BTreeMap<String, String>,
    pub namespaces: BTreeMap<String, NamespaceTarget>,
}

const BUILTIN_OVERRIDES: &[(&str, &str)] = &[
    ("react(exhaustive-deps)", "react-hooks/exhaustive-deps"),
    ("react(rules-of-hooks)", "react-hooks/rules-of-hooks"),
];

const BUILTIN_PREFIXES: &[(&str, &str)] = &[
    ("eslint", ""),
    ("react", "react/"),
    ("typescript", "@typescript-eslint/"),
    ("import", "import/"),
    ("nextjs", "@next/next/"),
    ("node", "n/"),
    ("jsx-a11y", "jsx-a11y/"),
    ("jsdoc", "jsdoc/"),
    ("jest", "jest/"),
    ("vitest", "vitest/"),
    ("unicorn", "unicorn/"),
    ("promise", "promise/"),
    ("react-perf", "react-perf/"),
    ("vue", "vue/"),
];

const BUILTIN_NO_EQUIVALENT: &[&str] = &["oxc"];

impl RuleMap {
    /// The mapping shipped with lintparity.
    #[must_use]
    pub fn builtin() -> Self {
        let overrides = BUILTIN_OVERRIDES
            .iter()
            .map(|(code, id)| (code.to_string(), id.to_string()))
            .collect();

        let mut namespaces: BTreeMap<String, NamespaceTarget> = BUILTIN_PREFIXES
            .iter()
            .map(|(ns, prefix)| (ns.to_string(), NamespaceTarget::prefix(*prefix)))
            .collect();
        for ns in BUILTIN_NO_EQUIVALENT {
            namespaces.insert(ns.to_string(), NamespaceTarget::NoEquivalent);
        }

        Self {
            overrides,
            namespaces,
        }
    }

    /// Parse a rule map from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, RuleMapError> {
        let map: RuleMap = toml::from_str(s)?;
        map.validate()?;
        Ok(map)
    }

    /// Load a rule map from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, RuleMapError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Reject namespace keys that no Oxlint code could ever carry, and
    /// targets that would still look like Oxlint codes after mapping.
    pub fn validate(&self) -> Result<(), RuleMapError> {
        if let Some(ns) = self.namespaces.keys().find(|ns| !is_valid_namespace(ns)) {
            return Err(RuleMapError::InvalidNamespace(ns.clone()));
        }

        let bad_override = self
            .overrides
            .iter()
            .find(|(_, target)| parse_source_code(target).is_some());
        if let Some((code, target)) = bad_override {
            return Err(RuleMapError::InvalidTarget {
                key: code.clone(),
                target: target.clone(),
            });
        }

        let bad_prefix = self.namespaces.iter().find_map(|(ns, target)| match target {
            NamespaceTarget::Prefix(p) if p.contains(['(', ')']) => Some((ns, p)),
            _ => None,
        });
        if let Some((ns, prefix)) = bad_prefix {
            return Err(RuleMapError::InvalidTarget {
                key: ns.clone(),
                target: prefix.clone(),
            });
        }

        Ok(())
    }

    /// Layer `other` on top of `self`; entries in `other` win.
    #[must_use]
    pub fn merged_with(mut self, other: RuleMap) -> Self {
        self.overrides.extend(other.overrides);
        self.namespaces.extend(other.namespaces);
        self
    }

    /// Render as TOML, the same shape [`RuleMap::from_toml`] reads.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
