//! CSV export artifact.
//!
//! One row per source key, columns `key,<source>,<target>...`. Translated
//! values are double-quoted with literal commas escaped as `\,` and newlines
//! as `\n`; a missing translation renders as `""`. The escaping is reversible
//! via [`unescape_value`].

use std::collections::BTreeMap;

use crate::locales::LocaleDictionary;

/// Escape a translatable value for a CSV cell.
///
/// Commas become the two-character sequence `\,`, newlines become `\n`.
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Reverse [`escape_value`].
///
/// Unknown escape sequences are kept verbatim (best-effort, matching the
/// tolerant extraction rules).
pub fn unescape_value(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(',') => result.push(','),
            Some('n') => result.push('\n'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

/// File name for an export artifact.
///
/// `<product>_translations_<locale>.csv`, or `..._all.csv` when every locale
/// is exported.
pub fn export_file_name(product: &str, locale: Option<&str>) -> String {
    format!("{}_translations_{}.csv", product, locale.unwrap_or("all"))
}

/// Render the CSV artifact.
///
/// Rows cover every source key in sorted order regardless of `locale`; the
/// flag narrows the columns to one target locale. The source column always
/// comes first after the key.
pub fn render_csv(
    source_locale: &str,
    dictionaries: &BTreeMap<String, LocaleDictionary>,
    locale: Option<&str>,
) -> String {
    let empty = LocaleDictionary::new();
    let source = dictionaries.get(source_locale).unwrap_or(&empty);

    let targets: Vec<&str> = dictionaries
        .keys()
        .map(String::as_str)
        .filter(|code| *code != source_locale)
        .filter(|code| locale.is_none_or(|selected| *code == selected))
        .collect();

    let mut out = String::new();
    out.push_str("key,");
    out.push_str(source_locale);
    for code in &targets {
        out.push(',');
        out.push_str(code);
    }
    out.push('\n');

    for (key, entry) in source {
        out.push_str(key);
        out.push_str(",\"");
        out.push_str(&escape_value(&entry.value));
        out.push('"');
        for code in &targets {
            let translated = dictionaries
                .get(*code)
                .and_then(|dict| dict.get(key))
                .map(|e| escape_value(&e.value))
                .unwrap_or_default();
            out.push_str(",\"");
            out.push_str(&translated);
            out.push('"');
        }
        out.push('\n');
    }

    out
}
