use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".translintrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing one `<locale>.json` file per locale.
    #[serde(default = "default_locales_root", alias = "localesDir")]
    pub locales_root: String,
    /// Locale used as the reference for completeness.
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    /// Product name used as the prefix for exported files.
    #[serde(default = "default_product")]
    pub product: String,
    /// Glob patterns for keys to exclude from every rule.
    #[serde(default)]
    pub ignore_keys: Vec<String>,
}

fn default_locales_root() -> String {
    "./locales".to_string()
}

fn default_source_locale() -> String {
    "en".to_string()
}

fn default_product() -> String {
    "app".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            source_locale: default_source_locale(),
            product: default_product(),
            ignore_keys: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignoreKeys` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignore_keys {
            Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern in 'ignoreKeys': \"{}\"", pattern)
            })?;
        }

        Ok(())
    }

    /// Compile `ignoreKeys` into glob patterns.
    ///
    /// `validate` must have accepted the config first; invalid patterns are
    /// skipped here rather than re-reported.
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignore_keys
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
