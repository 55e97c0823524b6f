//! Per-run analysis context.
//!
//! A [`CheckContext`] is an immutable snapshot: configuration merged with CLI
//! overrides plus every locale dictionary loaded from disk. All rules operate
//! on this snapshot; nothing is reloaded or mutated during a run.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};

use crate::{
    config::{Config, load_config},
    locales::{LocaleDictionary, ParseWarning, filter_ignored_keys, scan_locale_files},
};

/// CLI overrides applied on top of the config file.
#[derive(Debug, Default, Clone)]
pub struct LoadOptions {
    pub locales_root: Option<PathBuf>,
    pub source_locale: Option<String>,
}

#[derive(Debug)]
pub struct CheckContext {
    pub config: Config,
    /// Effective source locale after overrides.
    pub source_locale: String,
    /// All loaded dictionaries keyed by locale code, source included.
    pub dictionaries: BTreeMap<String, LocaleDictionary>,
    /// Locale files that failed to parse.
    pub parse_warnings: Vec<ParseWarning>,
}

impl CheckContext {
    /// Load config (discovered upward from `start_dir`) and every locale
    /// dictionary, apply CLI overrides and `ignoreKeys` filtering.
    ///
    /// A missing source locale file is an error; a missing or unparsable
    /// target locale is not.
    pub fn load(start_dir: &Path, options: &LoadOptions) -> Result<Self> {
        let config = load_config(start_dir)?.config;

        let locales_root = options
            .locales_root
            .clone()
            .unwrap_or_else(|| start_dir.join(&config.locales_root));
        let source_locale = options
            .source_locale
            .clone()
            .unwrap_or_else(|| config.source_locale.clone());

        let scan = scan_locale_files(&locales_root)?;
        let mut dictionaries = scan.dictionaries;

        if !dictionaries.contains_key(&source_locale) {
            bail!(
                "Source locale '{}' not found in '{}'.\n\
                 Hint: expected a file named {}.json, or set 'sourceLocale' in {}.",
                source_locale,
                locales_root.display(),
                source_locale,
                crate::config::CONFIG_FILE_NAME
            );
        }

        filter_ignored_keys(&mut dictionaries, &config.ignore_patterns());

        Ok(Self {
            config,
            source_locale,
            dictionaries,
            parse_warnings: scan.warnings,
        })
    }

    /// Number of locale files that were loaded.
    pub fn locale_file_count(&self) -> usize {
        self.dictionaries.len()
    }

    /// Number of keys in the source dictionary.
    pub fn source_key_count(&self) -> usize {
        self.dictionaries
            .get(&self.source_locale)
            .map(|dict| dict.len())
            .unwrap_or(0)
    }
}
