//! # lintparity-parse
//!
//! **Tier 2 (Collaborator Adapters)**
//!
//! Turns raw linter output into [`Violation`](lintparity_types::Violation)
//! streams ready for reconciliation, and reads the facts `@oxlint/migrate`
//! reports about the migrated configuration.
//!
//! ## What belongs here
//! * ESLint and Oxlint JSON readers
//! * Repository-relative path normalization
//! * Migration detail and generated-config readers
//!
//! ## What does NOT belong here
//! * Running linters or reading files (callers pass strings)
//! * Matching violations

mod error;
mod eslint;
mod migrate;
mod oxlint;
mod path;

pub use error::ParseError;
pub use eslint::parse_eslint;
pub use migrate::{count_ported_rules, parse_migration_details};
pub use oxlint::{OxlintParse, parse_oxlint};
pub use path::{normalize_rel_path, repo_relative};
