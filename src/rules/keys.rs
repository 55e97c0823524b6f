//! Key-existence rule.
//!
//! Compares the key sets of the source locale and each target locale. A key
//! present in the source but absent from a target is *missing*; a key present
//! in a target but absent from the source is an *orphan* (the source locale
//! itself is probably incomplete).

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    context::CheckContext,
    issues::{MissingKeyIssue, OrphanKeyIssue},
    locales::LocaleDictionary,
};

/// Key-set difference between a source and a target dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDiff {
    /// Keys in source but not in target.
    pub missing: BTreeSet<String>,
    /// Keys in target but not in source.
    pub extra: BTreeSet<String>,
}

/// Diff the key sets of two dictionaries.
///
/// Keys are compared by exact string equality; no normalization is performed.
/// Total function: empty dictionaries simply produce one-sided diffs.
pub fn diff_keys(source: &LocaleDictionary, target: &LocaleDictionary) -> KeyDiff {
    let missing = source
        .keys()
        .filter(|key| !target.contains_key(*key))
        .cloned()
        .collect();
    let extra = target
        .keys()
        .filter(|key| !source.contains_key(*key))
        .cloned()
        .collect();
    KeyDiff { missing, extra }
}

pub fn check_missing_key_issues(ctx: &CheckContext) -> Vec<MissingKeyIssue> {
    check_missing_keys(&ctx.source_locale, &ctx.dictionaries)
}

/// Find source keys that are missing in one or more target locales.
///
/// Returns one issue per source key, listing every locale that lacks it,
/// sorted by file path, line and key for deterministic output.
pub fn check_missing_keys(
    source_locale: &str,
    dictionaries: &BTreeMap<String, LocaleDictionary>,
) -> Vec<MissingKeyIssue> {
    let Some(source) = dictionaries.get(source_locale) else {
        return Vec::new();
    };

    let mut issues: Vec<MissingKeyIssue> = source
        .iter()
        .filter_map(|(key, entry)| {
            let mut missing_in: Vec<String> = dictionaries
                .iter()
                .filter(|(locale, dict)| *locale != source_locale && !dict.contains_key(key))
                .map(|(locale, _)| locale.clone())
                .collect();
            missing_in.sort();

            if missing_in.is_empty() {
                None
            } else {
                Some(MissingKeyIssue {
                    context: entry.context(key),
                    source_locale: source_locale.to_string(),
                    missing_in,
                })
            }
        })
        .collect();

    issues.sort_by(|a, b| {
        a.context
            .location
            .file_path
            .cmp(&b.context.location.file_path)
            .then_with(|| a.context.location.line.cmp(&b.context.location.line))
            .then_with(|| a.context.key.cmp(&b.context.key))
    });

    issues
}

pub fn check_orphan_key_issues(ctx: &CheckContext) -> Vec<OrphanKeyIssue> {
    check_orphan_keys(&ctx.source_locale, &ctx.dictionaries)
}

/// Find keys defined in a target locale but absent from the source locale.
pub fn check_orphan_keys(
    source_locale: &str,
    dictionaries: &BTreeMap<String, LocaleDictionary>,
) -> Vec<OrphanKeyIssue> {
    let empty = LocaleDictionary::new();
    let source = dictionaries.get(source_locale).unwrap_or(&empty);

    let mut issues: Vec<OrphanKeyIssue> = dictionaries
        .iter()
        .filter(|(locale, _)| *locale != source_locale)
        .flat_map(|(locale, dict)| {
            let diff = diff_keys(source, dict);
            diff.extra
                .into_iter()
                .filter_map(|key| {
                    let entry = dict.get(&key)?;
                    Some(OrphanKeyIssue {
                        context: entry.context(&key),
                        locale: locale.clone(),
                        source_locale: source_locale.to_string(),
                    })
                })
                .collect::<Vec<_>>()
        })
        .collect();

    issues.sort_by(|a, b| {
        a.context
            .location
            .file_path
            .cmp(&b.context.location.file_path)
            .then_with(|| a.context.location.line.cmp(&b.context.location.line))
            .then_with(|| a.context.key.cmp(&b.context.key))
    });

    issues
}
