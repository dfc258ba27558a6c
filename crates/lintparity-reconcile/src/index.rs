//! Per-file membership index over violation keys.

use std::collections::{HashMap, HashSet};

use lintparity_types::{Violation, ViolationKey};

/// `file_path → {line:column:rule}` for one stream.
///
/// Files the stream never mentioned behave as empty sets.
#[derive(Debug, Default)]
pub(crate) struct FileIndex<'a> {
    by_file: HashMap<&'a str, HashSet<ViolationKey<'a>>>,
}

impl<'a> FileIndex<'a> {
    pub(crate) fn build<I>(violations: I) -> Self
    where
        I: IntoIterator<Item = &'a Violation>,
    {
        let mut by_file: HashMap<&'a str, HashSet<ViolationKey<'a>>> = HashMap::new();
        for v in violations {
            by_file.entry(v.file_path.as_str()).or_default().insert(v.key());
        }
        Self { by_file }
    }

    /// Whether the same finding exists in the same file.
    pub(crate) fn contains(&self, v: &Violation) -> bool {
        self.by_file
            .get(v.file_path.as_str())
            .is_some_and(|keys| keys.contains(&v.key()))
    }

    #[cfg(test)]
    pub(crate) fn file_count(&self) -> usize {
        self.by_file.len()
    }
}
