//! # lintparity-format
//!
//! **Tier 3 (Formatting)**
//!
//! Renders a [`ComparisonReport`] for humans (text, Markdown) and machines
//! (JSON envelope).
//!
//! ## What belongs here
//! * Text and Markdown rendering
//! * JSON envelope serialization
//! * Display limits for long lists
//!
//! ## What does NOT belong here
//! * Comparison logic (counts are taken from the report as-is)
//! * CLI arg parsing

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use lintparity_types::{ComparisonReport, ReportFormat, ToolInfo, ToolVersions, Violation};

/// Unsupported rules shown before the list is cut short.
pub const DEFAULT_UNSUPPORTED_LIMIT: usize = 20;

/// Presentation settings that are not part of the report itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Label for the compared repository (usually its URL).
    pub repository: Option<String>,
    pub versions: ToolVersions,
    /// Max unsupported rules listed; 0 lists all.
    pub unsupported_limit: usize,
    /// Max violations listed per only-in section; 0 lists all.
    pub violation_limit: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            repository: None,
            versions: ToolVersions::default(),
            unsupported_limit: DEFAULT_UNSUPPORTED_LIMIT,
            violation_limit: 0,
        }
    }
}

/// JSON output: the report plus the context needed to read it later.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope<'a> {
    pub tool: ToolInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<&'a str>,
    pub versions: &'a ToolVersions,
    pub match_rate: Option<f64>,
    pub ported_rate: Option<f64>,
    pub report: &'a ComparisonReport,
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "lintparity".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Render `report` in the requested format.
pub fn render(report: &ComparisonReport, format: ReportFormat, opts: &RenderOptions) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report, opts)),
        ReportFormat::Md => Ok(render_markdown(report, opts)),
        ReportFormat::Json => render_json(report, opts),
    }
}

/// Render `report` into `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &ComparisonReport,
    format: ReportFormat,
    opts: &RenderOptions,
) -> Result<()> {
    let rendered = render(report, format, opts)?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

/// `"87.5%"`, or `"N/A"` when the rate is undefined.
///
/// Halves round away from zero: `1/16` prints as `6.3%`.
#[must_use]
pub fn format_pct(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{:.1}%", (r * 1000.0).round() / 10.0),
        None => "N/A".to_string(),
    }
}

fn shown<T>(items: &[T], limit: usize) -> (&[T], usize) {
    if limit == 0 || items.len() <= limit {
        (items, 0)
    } else {
        (&items[..limit], items.len() - limit)
    }
}

fn summary_line(report: &ComparisonReport) -> String {
    let match_summary = match report.match_rate() {
        Some(_) => format!(
            "Oxlint matched {} of ESLint violations for supported rules.",
            format_pct(report.match_rate())
        ),
        None => "ESLint reported no violations.".to_string(),
    };
    format!(
        "Migration ported {} rules ({} of {} total). {}",
        report.ported_rules_count,
        format_pct(report.ported_rate()),
        report.total_rules(),
        match_summary
    )
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Plain-text report for terminals and CI logs.
#[must_use]
pub fn render_text(report: &ComparisonReport, opts: &RenderOptions) -> String {
    let mut s = String::new();

    s.push_str("=== Oxlint vs ESLint Comparison ===\n");
    if let Some(repo) = &opts.repository {
        let _ = writeln!(s, "Repository: {repo}");
    }
    s.push('\n');
    let _ = writeln!(
        s,
        "ESLint violations (supported rules only): {}",
        report.eslint_total
    );
    let _ = writeln!(s, "Oxlint violations: {}", report.oxlint_total);
    let _ = writeln!(s, "Matched violations: {}", report.matched_count);

    text_violations(&mut s, "Only in ESLint", &report.only_in_eslint, opts.violation_limit);
    text_violations(&mut s, "Only in Oxlint", &report.only_in_oxlint, opts.violation_limit);

    let _ = writeln!(
        s,
        "\n--- Unsupported Rules (skipped, {} total) ---",
        report.unsupported_rules.len()
    );
    if report.unsupported_rules.is_empty() {
        s.push_str("  (none)\n");
    } else {
        let (rules, hidden) = shown(&report.unsupported_rules, opts.unsupported_limit);
        for rule in rules {
            let _ = writeln!(s, "  {rule}");
        }
        if hidden > 0 {
            let _ = writeln!(s, "  ... and {hidden} more");
        }
    }

    let _ = writeln!(s, "\nSummary: {}", summary_line(report));
    let _ = writeln!(s, "Versions: {}", opts.versions);
    s
}

fn text_violations(s: &mut String, title: &str, violations: &[Violation], limit: usize) {
    let _ = writeln!(s, "\n--- {title} ({} violations) ---", violations.len());
    if violations.is_empty() {
        s.push_str("  (none)\n");
        return;
    }
    let (listed, hidden) = shown(violations, limit);
    for v in listed {
        let _ = writeln!(s, "  {}  {}", v.location(), v.rule_id);
    }
    if hidden > 0 {
        let _ = writeln!(s, "  ... and {hidden} more");
    }
}

// ---------------------------------------------------------------------------
// Markdown
// ---------------------------------------------------------------------------

/// Markdown report suited to PR comments.
#[must_use]
pub fn render_markdown(report: &ComparisonReport, opts: &RenderOptions) -> String {
    let mut s = String::new();

    s.push_str("## Oxlint vs ESLint Comparison\n\n");
    if let Some(repo) = &opts.repository {
        let _ = writeln!(s, "**Repository:** {repo}\n");
    }

    s.push_str("|Metric|Value|\n");
    s.push_str("|---|---:|\n");
    let _ = writeln!(
        s,
        "|ESLint violations (supported rules only)|{}|",
        report.eslint_total
    );
    let _ = writeln!(s, "|Oxlint violations|{}|", report.oxlint_total);
    let _ = writeln!(s, "|Matched violations|{}|", report.matched_count);
    let _ = writeln!(s, "|Match rate|{}|", format_pct(report.match_rate()));
    let _ = writeln!(
        s,
        "|Ported rules|{} of {} ({})|",
        report.ported_rules_count,
        report.total_rules(),
        format_pct(report.ported_rate())
    );

    md_violations(&mut s, "Only in ESLint", &report.only_in_eslint, opts.violation_limit);
    md_violations(&mut s, "Only in Oxlint", &report.only_in_oxlint, opts.violation_limit);

    let _ = writeln!(
        s,
        "\n### Unsupported Rules ({})\n",
        report.unsupported_rules.len()
    );
    if report.unsupported_rules.is_empty() {
        s.push_str("_(none)_\n");
    } else {
        let (rules, hidden) = shown(&report.unsupported_rules, opts.unsupported_limit);
        for rule in rules {
            let _ = writeln!(s, "- `{rule}`");
        }
        if hidden > 0 {
            let _ = writeln!(s, "- ... and {hidden} more");
        }
    }

    let _ = writeln!(s, "\n_Versions: {}_", opts.versions);
    s
}

fn md_violations(s: &mut String, title: &str, violations: &[Violation], limit: usize) {
    let _ = writeln!(s, "\n### {title} ({})\n", violations.len());
    if violations.is_empty() {
        s.push_str("_(none)_\n");
        return;
    }
    s.push_str("|File|Line|Col|Rule|\n");
    s.push_str("|---|---:|---:|---|\n");
    let (listed, hidden) = shown(violations, limit);
    for v in listed {
        let _ = writeln!(
            s,
            "|{}|{}|{}|`{}`|",
            v.file_path, v.line, v.column, v.rule_id
        );
    }
    if hidden > 0 {
        let _ = writeln!(s, "\n_... and {hidden} more_");
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Pretty JSON envelope around the full, uncapped report.
pub fn render_json(report: &ComparisonReport, opts: &RenderOptions) -> Result<String> {
    let envelope = ReportEnvelope {
        tool: tool_info(),
        repository: opts.repository.as_deref(),
        versions: &opts.versions,
        match_rate: report.match_rate(),
        ported_rate: report.ported_rate(),
        report,
    };
    let mut json = serde_json::to_string_pretty(&envelope)?;
    json.push('\n');
    Ok(json)
}
