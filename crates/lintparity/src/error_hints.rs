use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("no such file or directory")
        || haystack.contains("cannot find the file")
    {
        push_hint(&mut out, "Verify the input path exists and is readable.");
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("eslint json output") || haystack.contains("eslint output is not an array")
    {
        push_hint(
            &mut out,
            "Capture ESLint output with `npx eslint . --format json > eslint.json`.",
        );
    }

    if haystack.contains("oxlint json output") {
        push_hint(
            &mut out,
            "Capture Oxlint output with `npx oxlint --format json > oxlint.json`.",
        );
    }

    if haystack.contains("oxlint config") {
        push_hint(
            &mut out,
            "Pass the `.oxlintrc.json` written by `@oxlint/migrate`, or use `--ported-count`.",
        );
    }

    if haystack.contains("toml") {
        push_hint(
            &mut out,
            "Check the TOML syntax; `lintparity rules --format toml` prints a valid rule map.",
        );
    }

    if haystack.contains("invalid namespace") {
        push_hint(
            &mut out,
            "Namespace keys may only contain letters, digits, '_' and '-'.",
        );
    }

    if haystack.contains("invalid target") {
        push_hint(
            &mut out,
            "Map Oxlint codes to ESLint rule ids such as `plugin/rule`, not to other Oxlint codes.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn format_without_hints_is_single_line() {
        let err = anyhow!("something odd");
        assert_eq!(format(&err), "Error: something odd");
    }

    #[test]
    fn missing_file_gets_path_hints() {
        let err = anyhow!("No such file or directory (os error 2)")
            .context("Failed to read ESLint output from eslint.json");
        let text = format(&err);
        assert!(text.contains("Hints:"));
        assert!(text.contains("Verify the input path exists"));
    }

    #[test]
    fn eslint_json_error_gets_capture_hint() {
        let err = anyhow!("Failed to parse ESLint JSON output: EOF while parsing");
        assert!(format(&err).contains("--format json > eslint.json"));
    }

    #[test]
    fn hints_are_not_repeated() {
        let err = anyhow!("toml").context("toml again");
        let text = format(&err);
        assert_eq!(text.matches("Check the TOML syntax").count(), 1);
    }
}
