//! Parsing of Oxlint's `namespace(rule-name)` diagnostic codes.

/// A source rule code split into its two halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceCode<'a> {
    pub namespace: &'a str,
    pub rule_name: &'a str,
}

/// Split `namespace(rule-name)` into its parts.
///
/// The namespace is one or more ASCII word characters or `-`. The rule name is
/// everything between the first `(` and the final `)`; it must be non-empty
/// and may not contain a line terminator.
///
/// # Examples
///
/// ```
/// use lintparity_normalize::parse_source_code;
///
/// let code = parse_source_code("jsx-a11y(alt-text)").unwrap();
/// assert_eq!(code.namespace, "jsx-a11y");
/// assert_eq!(code.rule_name, "alt-text");
///
/// assert!(parse_source_code("no-debugger").is_none());
/// assert!(parse_source_code("eslint()").is_none());
/// ```
#[must_use]
pub fn parse_source_code(code: &str) -> Option<SourceCode<'_>> {
    let open = code.find('(')?;
    let namespace = &code[..open];
    if namespace.is_empty() || !namespace.bytes().all(is_namespace_byte) {
        return None;
    }

    let rule_name = code[open + 1..].strip_suffix(')')?;
    if rule_name.is_empty() || rule_name.contains(is_line_terminator) {
        return None;
    }

    Some(SourceCode {
        namespace,
        rule_name,
    })
}

/// Whether `name` is usable as a namespace key.
#[must_use]
pub fn is_valid_namespace(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_namespace_byte)
}

fn is_namespace_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
