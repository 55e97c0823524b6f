//! Translint - consistency checker for translation locale files
//!
//! Translint is a CLI tool and library for auditing a directory of JSON locale
//! dictionaries against a designated source locale. It detects missing keys,
//! orphan keys, placeholder mismatches and markup mismatches, and can render
//! a per-locale workflow summary or export translations to CSV.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `context`: Loaded dictionaries plus effective configuration for one run
//! - `export`: CSV export artifact
//! - `issues`: Issue type definitions and reporting
//! - `locales`: Locale dictionary loading
//! - `report`: Consistency report aggregation
//! - `rules`: Consistency rules (key existence, placeholders, markup)
//! - `workflow`: Workflow summary table

pub mod cli;
pub mod config;
pub mod context;
pub mod export;
pub mod issues;
pub mod locales;
pub mod report;
pub mod rules;
pub mod workflow;
