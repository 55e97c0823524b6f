//! Issue types for consistency analysis results.
//!
//! Each issue is self-contained with all information the reporter needs to
//! display it: a location in a locale file, the affected key and value, and
//! rule-specific detail.

use enum_dispatch::enum_dispatch;

use crate::locales::MessageContext;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    OrphanKey,
    PlaceholderMismatch,
    MarkupMismatch,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::OrphanKey => write!(f, "orphan-key"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::MarkupMismatch => write!(f, "markup-mismatch"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Key defined in the source locale but missing in other locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    /// The source locale entry for the key.
    pub context: MessageContext,
    pub source_locale: String,
    /// Locales where this key is missing, sorted.
    pub missing_in: Vec<String>,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// Key defined in a target locale but not in the source locale.
///
/// Usually means the source dictionary itself is incomplete, not that the
/// target is wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanKeyIssue {
    /// The target locale entry for the key.
    pub context: MessageContext,
    /// The locale where this orphan key exists.
    pub locale: String,
    pub source_locale: String,
}

impl OrphanKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::OrphanKey
    }
}

/// Placeholder sets differ between the source and a target value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    /// The target locale entry for the key.
    pub context: MessageContext,
    pub locale: String,
    /// Placeholders present in source but not in the translation.
    pub missing: std::collections::BTreeSet<String>,
    /// Placeholders present in the translation but not in source.
    pub unexpected: std::collections::BTreeSet<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Markup tag counts differ between the source and a target value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupMismatchIssue {
    /// The target locale entry for the key.
    pub context: MessageContext,
    pub locale: String,
    pub source_count: usize,
    pub target_count: usize,
}

impl MarkupMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MarkupMismatch
    }
}

/// Locale file that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A consistency issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingKey(MissingKeyIssue),
    OrphanKey(OrphanKeyIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    MarkupMismatch(MarkupMismatchIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Locale file location with key/value context.
    Message(&'a MessageContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to the CLI.
///
/// Implemented by all issue types; `enum_dispatch` provides zero-cost
/// dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name, error, etc.).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("missing in: {}", self.missing_in.join(", ")))
    }
}

impl Report for OrphanKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "defined in {} but not in {} (\"{}\")",
            self.locale, self.source_locale, self.context.value
        ))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            let list: Vec<String> = self.missing.iter().map(|p| format!("{{{}}}", p)).collect();
            parts.push(format!("{} missing {}", self.locale, list.join(", ")));
        }
        if !self.unexpected.is_empty() {
            let list: Vec<String> = self
                .unexpected
                .iter()
                .map(|p| format!("{{{}}}", p))
                .collect();
            parts.push(format!("{} has unexpected {}", self.locale, list.join(", ")));
        }
        Some(parts.join("; "))
    }
}

impl Report for MarkupMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "source has {} tag(s), {} has {}",
            self.source_count, self.locale, self.target_count
        ))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
