//! Placeholder consistency rule.
//!
//! Translatable values may embed parameter placeholders such as `{name}` or
//! `{0}`. For every key present in both the source and a target locale, the
//! extracted placeholder *sets* must match in both directions; order and
//! duplicates do not matter. Keys absent from the target belong to the
//! key-existence rule and are skipped here.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::{
    context::CheckContext,
    issues::PlaceholderMismatchIssue,
    locales::LocaleDictionary,
};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9]+)\}").unwrap());

/// Extract the set of placeholder tokens from a translatable value.
///
/// Matches `{` + alphanumerics + `}`; duplicates collapse. Unbalanced braces
/// simply fail to match, so malformed values degrade to an empty set.
pub fn extract_placeholders(value: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(value)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Keys present in both dictionaries whose placeholder sets differ.
pub fn check_placeholders(source: &LocaleDictionary, target: &LocaleDictionary) -> BTreeSet<String> {
    source
        .iter()
        .filter_map(|(key, entry)| {
            let translated = target.get(key)?;
            let source_set = extract_placeholders(&entry.value);
            let target_set = extract_placeholders(&translated.value);
            (source_set != target_set).then(|| key.clone())
        })
        .collect()
}

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderMismatchIssue> {
    check_placeholder_mismatches(&ctx.source_locale, &ctx.dictionaries)
}

/// Build one issue per (locale, key) pair with a placeholder mismatch.
pub fn check_placeholder_mismatches(
    source_locale: &str,
    dictionaries: &BTreeMap<String, LocaleDictionary>,
) -> Vec<PlaceholderMismatchIssue> {
    let Some(source) = dictionaries.get(source_locale) else {
        return Vec::new();
    };

    let mut issues: Vec<PlaceholderMismatchIssue> = dictionaries
        .iter()
        .filter(|(locale, _)| *locale != source_locale)
        .flat_map(|(locale, dict)| {
            source
                .iter()
                .filter_map(|(key, entry)| {
                    let translated = dict.get(key)?;
                    let source_set = extract_placeholders(&entry.value);
                    let target_set = extract_placeholders(&translated.value);
                    if source_set == target_set {
                        return None;
                    }
                    Some(PlaceholderMismatchIssue {
                        context: translated.context(key),
                        locale: locale.clone(),
                        missing: source_set.difference(&target_set).cloned().collect(),
                        unexpected: target_set.difference(&source_set).cloned().collect(),
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
