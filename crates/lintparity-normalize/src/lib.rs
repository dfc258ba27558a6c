//! # lintparity-normalize
//!
//! **Tier 1 (Rule Normalization)**
//!
//! Converts Oxlint diagnostic codes (`namespace(rule-name)`) into the ESLint
//! rule ids used as the canonical namespace for comparison.
//!
//! ## What belongs here
//! * Source code parsing
//! * Rule map tables (overrides, namespace prefixes) and their TOML form
//! * Resolution of one code to a tagged outcome
//!
//! ## What does NOT belong here
//! * Reading linter output
//! * Matching violations
//!
//! ## Example
//! ```
//! use lintparity_normalize::Normalizer;
//!
//! let normalizer = Normalizer::builtin();
//! let result = normalizer.normalize("react(exhaustive-deps)");
//! assert_eq!(result.canonical_id, "react-hooks/exhaustive-deps");
//! assert!(result.mappable);
//! ```

mod code;
mod map;
mod normalizer;

pub use code::{SourceCode, is_valid_namespace, parse_source_code};
pub use map::{NamespaceTarget, RuleMap, RuleMapError};
pub use normalizer::{Normalized, Normalizer, Outcome};
