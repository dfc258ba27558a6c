//! # lintparity-reconcile
//!
//! **Tier 2 (Reconciliation)**
//!
//! Computes exact, per-location set differences between ESLint findings and
//! normalized Oxlint findings.
//!
//! ## What belongs here
//! * Exclusion of unsupported rules
//! * File-scoped matching on `line:column:rule`
//! * Building the [`ComparisonReport`](lintparity_types::ComparisonReport)
//!
//! ## What does NOT belong here
//! * Rule code normalization (see `lintparity-normalize`)
//! * Reading linter output or rendering reports
//! * Fuzzy or line-shifted matching
//!
//! ## Example
//! ```
//! use std::collections::BTreeSet;
//! use lintparity_reconcile::reconcile;
//! use lintparity_types::Violation;
//!
//! let eslint = vec![Violation::new("src/a.ts", 1, 1, "no-debugger")];
//! let oxlint = eslint.clone();
//! let report = reconcile(&eslint, &oxlint, &BTreeSet::new(), 0);
//! assert_eq!(report.matched_count, 1);
//! ```

mod index;
mod reconcile;

pub use reconcile::{reconcile, reconcile_with};
