//! Repository-relative path handling for linter output.

use std::path::{Component, Path};

/// Normalize a path for matching:
/// - converts `\` to `/`
/// - strips one leading `./`
///
/// # Examples
///
/// ```
/// use lintparity_parse::normalize_rel_path;
///
/// assert_eq!(normalize_rel_path("./src/main.ts"), "src/main.ts");
/// assert_eq!(normalize_rel_path(r"src\lib.ts"), "src/lib.ts");
/// ```
#[must_use]
pub fn normalize_rel_path(path: &str) -> String {
    let normalized = if path.contains('\\') {
        path.replace('\\', "/")
    } else {
        path.to_string()
    };
    match normalized.strip_prefix("./") {
        Some(stripped) => stripped.to_string(),
        None => normalized,
    }
}

/// Express `file` relative to `repo_root`.
///
/// Relative inputs are already repository-relative and are only normalized.
/// Absolute inputs are made relative lexically; files outside the root get
/// `..` segments. When the root itself is relative an absolute file cannot
/// be related to it and is returned normalized but unchanged.
#[must_use]
pub fn repo_relative(file: &str, repo_root: &Path) -> String {
    let path = Path::new(file);
    if !path.is_absolute() || !repo_root.is_absolute() {
        return normalize_rel_path(file);
    }

    let file_parts: Vec<Component<'_>> = path.components().filter(is_meaningful).collect();
    let root_parts: Vec<Component<'_>> = repo_root.components().filter(is_meaningful).collect();

    let common = file_parts
        .iter()
        .zip(&root_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    segments.extend(std::iter::repeat_n("..".to_string(), root_parts.len() - common));
    segments.extend(
        file_parts[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    normalize_rel_path(&segments.join("/"))
}

fn is_meaningful(c: &Component<'_>) -> bool {
    !matches!(c, Component::CurDir)
}
