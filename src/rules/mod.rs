//! Consistency rules.
//!
//! Each rule module exposes a pure function over loaded dictionaries plus a
//! `check_*_issues` wrapper that runs it against a [`CheckContext`] and turns
//! the result into reportable issues.
//!
//! [`CheckContext`]: crate::context::CheckContext

pub mod keys;
pub mod markup;
pub mod placeholders;
