//! Report formatting and printing utilities.
//!
//! This module displays issues in cargo-style format and renders the
//! status/export/init summaries. Separate from core logic so translint can be
//! used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, ExportSummary, InitSummary, StatusSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::locales::ParseWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(locale_files: usize, keys: usize) {
    print_success_to(locale_files, keys, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(locale_files: usize, keys: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} locale {}, {} {} - no issues found",
            locale_files,
            if locale_files == 1 { "file" } else { "files" },
            keys,
            if keys == 1 { "key" } else { "keys" }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

/// Print a warning about locale files that could not be parsed.
pub fn print_parse_warning(warnings: &[ParseWarning], verbose: bool) {
    print_parse_warning_to(warnings, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
///
/// Verbose mode lists each failed file with its parse error; otherwise a
/// single summary line points at `-v`.
pub fn print_parse_warning_to<W: Write>(warnings: &[ParseWarning], verbose: bool, writer: &mut W) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            let _ = writeln!(
                writer,
                "{} could not parse {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} locale file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col (path only for file-level issues)
    match issue.location() {
        ReportLocation::Message(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn extract_location_info<'a>(loc: &'a ReportLocation<'a>) -> (&'a str, usize, usize) {
    match loc {
        ReportLocation::Message(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
        ReportLocation::File { path } => (path, 0, 0),
    }
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    let a_loc = a.location();
    let b_loc = b.location();
    let (a_path, a_line, a_col) = extract_location_info(&a_loc);
    let (b_path, b_line, b_col) = extract_location_info(&b_loc);

    a_path
        .cmp(b_path)
        .then_with(|| a_line.cmp(&b_line))
        .then_with(|| a_col.cmp(&b_col))
        .then_with(|| a.rule().cmp(&b.rule()))
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_command_output(result);

    // Check renders parse failures as issues; other commands only get the
    // stderr warning.
    match result.summary {
        CommandSummary::Check => {
            if result.issues.is_empty() {
                print_success(result.locale_files_checked, result.keys_checked);
            }
        }
        _ => print_parse_warning(&result.parse_warnings, verbose),
    }
}

fn print_command_output(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
        }
        CommandSummary::Status(summary) => {
            print_status(summary);
        }
        CommandSummary::Export(summary) => {
            print_export(summary);
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

fn print_status(summary: &StatusSummary) {
    println!(
        "{} (source: {})",
        "Translation status".bold(),
        summary.source_locale
    );
    println!();
    print!("{}", summary.table);

    if summary.orphan_count > 0 {
        println!();
        println!(
            "{} {} key(s) exist in target locales but not in {} (run {} for details)",
            "note:".bold(),
            summary.orphan_count,
            summary.source_locale,
            "translint check orphan".cyan()
        );
    }
}

fn print_export(summary: &ExportSummary) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Exported {} {} for {} {} to {}",
            summary.key_count,
            if summary.key_count == 1 { "key" } else { "keys" },
            summary.locale_count,
            if summary.locale_count == 1 {
                "locale"
            } else {
                "locales"
            },
            summary.path.display()
        )
        .green()
    );
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
