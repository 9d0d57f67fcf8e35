//! Pretty-mode display logic for the sudoku-check CLI.
//!
//! This module handles all `--pretty` output: the header, colored per-line
//! result rows, and the closing summary, plus the plain verdict line used
//! by the default mode. Uses only the `console` crate (already a dependency).

use console::{pad_str, style, Alignment};
use std::time::Duration;
use sudoku_check_lib::{GridReport, LineResult};

// ── Verdict ──────────────────────────────────────────────────────────────────

/// The single verdict line printed on stdout in every text mode.
pub fn verdict_line(report: &GridReport) -> &'static str {
    if report.is_valid() {
        "Sudoku is valid"
    } else {
        "Sudoku is invalid"
    }
}

// ── Pretty report ────────────────────────────────────────────────────────────

/// Print the full per-line breakdown: header, 18 result rows, summary.
pub fn print_report(report: &GridReport, duration: Duration) {
    print_header(report.lines.len());

    for line in &report.lines {
        print_line_result(line);
    }

    println!();
    print_summary(report, duration);
}

/// Print a styled header at the start of a pretty run.
fn print_header(line_count: usize) {
    println!(
        "{} {} {}",
        style("sudoku-check").bold(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim(),
        style(format!("— Checking {} lines", line_count)).dim(),
    );
    println!();
}

/// Format and print a single line result with colors and alignment.
///
/// A check duration is appended (dimmed) whenever one was captured.
fn print_line_result(line: &LineResult) {
    let label_width = 12;
    let label = line_label(line);
    let padded_label = pad_str(&label, label_width, Alignment::Left, None);

    let timing_str = line
        .check_duration
        .map(|d| format!("  {}", style(format_duration(d)).dim()))
        .unwrap_or_default();

    if line.distinct {
        println!(
            "  {}  {}{}",
            style(&padded_label).white(),
            style("OK").green().bold(),
            timing_str,
        );
    } else {
        println!(
            "  {}  {}{}",
            style(&padded_label).white(),
            style("DUPLICATE").red().bold(),
            timing_str,
        );
    }
}

/// Print the closing summary with counts and total duration.
fn print_summary(report: &GridReport, duration: Duration) {
    let total = report.lines.len();
    let failed = report.violations().len();
    let passed = total - failed;

    let verdict = if report.is_valid() {
        style("VALID").green().bold()
    } else {
        style("INVALID").red().bold()
    };

    println!(
        "{} {} checked, {} ok, {} with duplicates in {} — {}",
        style("Summary:").bold(),
        format_count(total, "line"),
        passed,
        failed,
        format_duration(duration),
        verdict,
    );
}

// ── Formatting helpers ───────────────────────────────────────────────────────

/// Human-facing label for a line, 1-based: "row 1" .. "column 9".
pub fn line_label(line: &LineResult) -> String {
    format!("{} {}", line.kind, line.index + 1)
}

/// Format a duration compactly: sub-millisecond values in µs, the rest in ms.
pub fn format_duration(duration: Duration) -> String {
    if duration < Duration::from_millis(1) {
        format!("{}µs", duration.as_micros())
    } else {
        format!("{}ms", duration.as_millis())
    }
}

fn format_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_check_lib::{GridReport, LineKind, LineResult};

    fn make_line(kind: LineKind, index: usize, distinct: bool) -> LineResult {
        LineResult {
            kind,
            index,
            distinct,
            check_duration: None,
        }
    }

    #[test]
    fn test_verdict_line_valid() {
        let report = GridReport::from_lines(vec![make_line(LineKind::Row, 0, true)]);
        assert_eq!(verdict_line(&report), "Sudoku is valid");
    }

    #[test]
    fn test_verdict_line_invalid() {
        let report = GridReport::from_lines(vec![
            make_line(LineKind::Row, 0, true),
            make_line(LineKind::Column, 3, false),
        ]);
        assert_eq!(verdict_line(&report), "Sudoku is invalid");
    }

    #[test]
    fn test_line_label_is_one_based() {
        assert_eq!(line_label(&make_line(LineKind::Row, 0, true)), "row 1");
        assert_eq!(line_label(&make_line(LineKind::Column, 8, true)), "column 9");
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
        assert_eq!(format_duration(Duration::from_millis(12)), "12ms");
    }

    #[test]
    fn test_format_count_pluralises() {
        assert_eq!(format_count(1, "line"), "1 line");
        assert_eq!(format_count(18, "line"), "18 lines");
    }
}
