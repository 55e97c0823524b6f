//! Locale dictionary loading.
//!
//! Each locale is a single JSON file named `<locale>.json`. Nested objects are
//! flattened into dot-joined keys so the rest of the tool only ever sees flat
//! dictionaries. Every entry remembers the file and line it came from so
//! issues can point back at the locale file.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
};

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// One translatable value with its origin in the locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    pub value: String,
    pub file_path: String,
    pub line: usize,
}

impl LocaleEntry {
    pub fn context(&self, key: &str) -> MessageContext {
        MessageContext::new(
            MessageLocation::new(&self.file_path, self.line, 1),
            key,
            &self.value,
        )
    }
}

/// Flat key -> entry mapping for one locale.
///
/// Ordered so every downstream report is deterministic.
pub type LocaleDictionary = BTreeMap<String, LocaleEntry>;

/// Location of a key inside a locale file (1-based line/col).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// A key/value pair together with its location, as attached to issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    pub key: String,
    pub value: String,
}

impl MessageContext {
    pub fn new(location: MessageLocation, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// A locale file that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanLocalesResult {
    pub dictionaries: BTreeMap<String, LocaleDictionary>,
    pub warnings: Vec<ParseWarning>,
}

pub fn parse_locale_file(path: &Path) -> Result<LocaleDictionary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse locale file: {:?}", path))?;

    let file_path = path.to_string_lossy().to_string();
    // Pre-compute line starts for O(log n) line lookups
    let line_index = build_line_index(&content);
    let mut dictionary = LocaleDictionary::new();
    flatten_value(
        &json,
        String::new(),
        &file_path,
        &content,
        &line_index,
        &mut dictionary,
    );
    Ok(dictionary)
}

/// Build an index of line start byte offsets.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the 1-based line number for a byte offset using binary search.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Find the line where a key appears in the locale file.
///
/// Searches each key part in sequence so duplicate leaf keys resolve to the
/// right namespace (`common.submit` finds the `"submit"` after `"common"`,
/// not one under another prefix). A match only counts as a key when it is
/// followed by a colon, so string values containing the same text are skipped.
fn find_key_line(content: &str, key_path: &str, line_index: &[usize]) -> usize {
    let parts: Vec<&str> = key_path.split('.').collect();

    let mut search_start = 0;
    for part in &parts {
        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();

            if after_pattern < remaining.len() {
                let is_key = remaining[after_pattern..].trim_start().starts_with(':');
                if is_key {
                    search_start += after_pattern;
                    found = true;
                    break;
                }
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}

fn flatten_value(
    value: &Value,
    prefix: String,
    file_path: &str,
    content: &str,
    line_index: &[usize],
    result: &mut LocaleDictionary,
) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_value(val, new_prefix, file_path, content, line_index, result);
            }
        }
        Value::String(s) => {
            let line = find_key_line(content, &prefix, line_index);
            result.insert(
                prefix,
                LocaleEntry {
                    value: s.clone(),
                    file_path: file_path.to_string(),
                    line,
                },
            );
        }
        // Non-string leaves carry no translatable text
        _ => {}
    }
}

/// Extracts the locale code from a file name.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/locales/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

pub fn scan_locale_files(locales_root: impl AsRef<Path>) -> Result<ScanLocalesResult> {
    let locales_root = locales_root.as_ref();
    let mut result = ScanLocalesResult::default();

    if !locales_root.exists() {
        bail!(
            "Locales directory '{}' does not exist.\n\
             Hint: Check your {} 'localesRoot' setting.",
            locales_root.display(),
            crate::config::CONFIG_FILE_NAME
        );
    }

    if !locales_root.is_dir() {
        bail!("'{}' is not a directory.", locales_root.display());
    }

    for entry in fs::read_dir(locales_root)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = extract_locale(&path)
        {
            match parse_locale_file(&path) {
                Ok(dictionary) => {
                    result.dictionaries.insert(locale, dictionary);
                }
                Err(e) => {
                    result.warnings.push(ParseWarning {
                        file_path: path.to_string_lossy().to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }
    }

    Ok(result)
}

/// Drop every key matching one of the ignore patterns, in every locale.
pub fn filter_ignored_keys(
    dictionaries: &mut BTreeMap<String, LocaleDictionary>,
    patterns: &[glob::Pattern],
) {
    if patterns.is_empty() {
        return;
    }

    for dictionary in dictionaries.values_mut() {
        let ignored: BTreeSet<String> = dictionary
            .keys()
            .filter(|key| patterns.iter().any(|p| p.matches(key)))
            .cloned()
            .collect();
        for key in ignored {
            dictionary.remove(&key);
        }
    }
}
