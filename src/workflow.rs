//! Workflow summary.
//!
//! Condenses a [`ConsistencyReportSet`] into per-locale translation progress:
//! every source key is either `Complete` or `Missing` for a locale, and the
//! summary table shows both counts with percentages.

use unicode_width::UnicodeWidthStr;

use crate::report::{ConsistencyReport, ConsistencyReportSet};

/// Translation status of one source key in one locale.
///
/// Only the two derivable statuses exist; there is no review workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    Complete,
    Missing,
}

/// Status of a source key in the given locale report.
pub fn key_status(report: &ConsistencyReport, key: &str) -> KeyStatus {
    if report.missing_keys.contains(key) {
        KeyStatus::Missing
    } else {
        KeyStatus::Complete
    }
}

/// Per-locale status counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSummary {
    pub locale: String,
    pub complete: usize,
    pub missing: usize,
    pub total: usize,
}

impl LocaleSummary {
    fn cell(count: usize, total: usize) -> String {
        let pct = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        };
        format!("{} ({:.0}%)", count, pct)
    }

    pub fn complete_cell(&self) -> String {
        Self::cell(self.complete, self.total)
    }

    pub fn missing_cell(&self) -> String {
        Self::cell(self.missing, self.total)
    }
}

/// Count key statuses for every target locale, sorted by locale code.
pub fn summarize(set: &ConsistencyReportSet) -> Vec<LocaleSummary> {
    set.locales
        .iter()
        .map(|(locale, report)| {
            let mut complete = 0;
            let mut missing = 0;
            for key in &set.source_keys {
                match key_status(report, key) {
                    KeyStatus::Complete => complete += 1,
                    KeyStatus::Missing => missing += 1,
                }
            }
            LocaleSummary {
                locale: locale.clone(),
                complete,
                missing,
                total: set.source_keys.len(),
            }
        })
        .collect()
}

/// Render the summary as an aligned plain-text table.
pub fn render_table(summaries: &[LocaleSummary]) -> String {
    let mut rows: Vec<[String; 3]> = vec![[
        "Locale".to_string(),
        "Complete".to_string(),
        "Missing".to_string(),
    ]];
    for summary in summaries {
        rows.push([
            summary.locale.clone(),
            summary.complete_cell(),
            summary.missing_cell(),
        ]);
    }

    let mut widths = [0usize; 3];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let mut out = String::new();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            out.push_str(cell);
            if i + 1 < row.len() {
                let padding = widths[i] - UnicodeWidthStr::width(cell.as_str()) + 2;
                out.push_str(&" ".repeat(padding));
            }
        }
        out.push('\n');
    }
    out
}
