//! Consistency report aggregation.
//!
//! [`build_report`] runs every rule against each target locale and folds the
//! results into one [`ConsistencyReport`] per locale plus a cross-locale view
//! of keys that exist somewhere but not in the source. It is a pure function
//! of the loaded dictionaries: calling it twice on the same input yields the
//! same report.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    locales::LocaleDictionary,
    rules::{keys::diff_keys, markup::check_markup, placeholders::check_placeholders},
};

/// Per-locale consistency findings against the source locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// Keys in source but not in this locale.
    pub missing_keys: BTreeSet<String>,
    /// Keys in this locale but not in source.
    pub extra_keys: BTreeSet<String>,
    /// Shared keys whose placeholder sets differ.
    pub parameter_mismatches: BTreeSet<String>,
    /// Shared keys whose markup tag counts differ.
    pub markup_mismatches: BTreeSet<String>,
    /// Size of the source dictionary.
    pub total_keys: usize,
}

impl ConsistencyReport {
    /// Share of source keys present in this locale, in `[0, 100]`.
    ///
    /// An empty source dictionary counts as fully translated.
    pub fn completion_percentage(&self) -> f64 {
        if self.total_keys == 0 {
            return 100.0;
        }
        (self.total_keys - self.missing_keys.len()) as f64 / self.total_keys as f64 * 100.0
    }
}

/// The aggregated result of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyReportSet {
    pub source_locale: String,
    /// Keys of the source dictionary; the domain every per-key status is
    /// derived over.
    pub source_keys: BTreeSet<String>,
    /// One report per target locale, keyed by locale code.
    pub locales: BTreeMap<String, ConsistencyReport>,
    /// Union of `extra_keys` across all targets: keys the source locale
    /// itself is probably missing.
    pub extra_anywhere: BTreeSet<String>,
}

/// Run all consistency checks for every target locale.
///
/// A source locale absent from `dictionaries` is treated as an empty
/// dictionary; absent or empty targets report 0% completion rather than
/// failing.
pub fn build_report(
    source_locale: &str,
    dictionaries: &BTreeMap<String, LocaleDictionary>,
) -> ConsistencyReportSet {
    let empty = LocaleDictionary::new();
    let source = dictionaries.get(source_locale).unwrap_or(&empty);
    let source_keys: BTreeSet<String> = source.keys().cloned().collect();
    let total_keys = source.len();

    let mut locales = BTreeMap::new();
    let mut extra_anywhere = BTreeSet::new();

    for (locale, dict) in dictionaries {
        if locale == source_locale {
            continue;
        }

        let diff = diff_keys(source, dict);
        extra_anywhere.extend(diff.extra.iter().cloned());

        locales.insert(
            locale.clone(),
            ConsistencyReport {
                missing_keys: diff.missing,
                extra_keys: diff.extra,
                parameter_mismatches: check_placeholders(source, dict),
                markup_mismatches: check_markup(source, dict),
                total_keys,
            },
        );
    }

    ConsistencyReportSet {
        source_locale: source_locale.to_string(),
        source_keys,
        locales,
        extra_anywhere,
    }
}
