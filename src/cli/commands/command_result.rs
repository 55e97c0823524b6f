use std::path::PathBuf;

use crate::issues::Issue;
use crate::locales::ParseWarning;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Status(StatusSummary),
    Export(ExportSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct StatusSummary {
    pub source_locale: String,
    /// Rendered workflow table.
    pub table: String,
    /// Keys present in some target locale but not in the source.
    pub orphan_count: usize,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub path: PathBuf,
    /// Number of target locale columns written.
    pub locale_count: usize,
    pub key_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a translint command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, a failure exit status should be returned when
    /// error_count > 0. If false, always exit 0.
    pub exit_on_errors: bool,
    /// All issues found during the check. Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Locale files that failed to parse.
    pub parse_warnings: Vec<ParseWarning>,
    /// Number of locale files that were loaded.
    pub locale_files_checked: usize,
    /// Number of keys in the source dictionary.
    pub keys_checked: usize,
}
