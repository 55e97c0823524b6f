//! Markup consistency rule.
//!
//! Translatable values may embed inline markup (`<b>`, `</b>`, `<br/>`).
//! For every key present in both the source and a target locale, the *count*
//! of matched tags must agree. The comparison is deliberately count-based
//! rather than tag-identity-based: `<b>x</b>` and `<i>x</i>` both count two
//! tags and are treated as consistent.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::{
    context::CheckContext,
    issues::MarkupMismatchIssue,
    locales::LocaleDictionary,
};

static MARKUP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Count the non-overlapping markup tags in a translatable value.
///
/// Unbalanced angle brackets simply fail to match and count zero.
pub fn markup_tag_count(value: &str) -> usize {
    MARKUP_REGEX.find_iter(value).count()
}

/// Keys present in both dictionaries whose markup tag counts differ.
pub fn check_markup(source: &LocaleDictionary, target: &LocaleDictionary) -> BTreeSet<String> {
    source
        .iter()
        .filter_map(|(key, entry)| {
            let translated = target.get(key)?;
            (markup_tag_count(&entry.value) != markup_tag_count(&translated.value))
                .then(|| key.clone())
        })
        .collect()
}

pub fn check_markup_issues(ctx: &CheckContext) -> Vec<MarkupMismatchIssue> {
    check_markup_mismatches(&ctx.source_locale, &ctx.dictionaries)
}

/// Build one issue per (locale, key) pair with a markup count mismatch.
pub fn check_markup_mismatches(
    source_locale: &str,
    dictionaries: &BTreeMap<String, LocaleDictionary>,
) -> Vec<MarkupMismatchIssue> {
    let Some(source) = dictionaries.get(source_locale) else {
        return Vec::new();
    };

    let mut issues: Vec<MarkupMismatchIssue> = dictionaries
        .iter()
        .filter(|(locale, _)| *locale != source_locale)
        .flat_map(|(locale, dict)| {
            source
                .iter()
                .filter_map(|(key, entry)| {
                    let translated = dict.get(key)?;
                    let source_count = markup_tag_count(&entry.value);
                    let target_count = markup_tag_count(&translated.value);
                    if source_count == target_count {
                        return None;
                    }
                    Some(MarkupMismatchIssue {
                        context: translated.context(key),
                        locale: locale.clone(),
                        source_count,
                        target_count,
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
