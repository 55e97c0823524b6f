use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};
use crate::locales::ParseWarning;

pub fn finish(
    summary: CommandSummary,
    issues: Vec<Issue>,
    parse_warnings: Vec<ParseWarning>,
    locale_files_checked: usize,
    keys_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    CommandResult {
        summary,
        error_count,
        exit_on_errors,
        issues,
        parse_warnings,
        locale_files_checked,
        keys_checked,
    }
}
