//! Route path matching.
//!
//! # Responsibilities
//! - Compare a location path against a literal route path
//! - Apply the matching options (case sensitivity, trailing slash)
//!
//! # Design Decisions
//! - Literal comparison only: no parameters, no wildcards, no prefixes
//! - Case-insensitive and trailing-slash tolerant by default, like the
//!   browser-side router the pages were written against
//! - Query strings and fragments are stripped before a path gets here

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Options controlling how literal paths are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchOptions {
    /// When false, `/MAP` matches `/map`.
    pub case_sensitive: bool,

    /// When false, one trailing slash is ignored (`/map/` matches `/map`).
    pub strict: bool,
}

/// Trait for matching a location path against a route.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this route.
    fn matches(&self, path: &str) -> bool;
}

/// Matches one literal path exactly, modulo [`MatchOptions`].
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    expected: String,
    options: MatchOptions,
}

impl ExactPathMatcher {
    /// Create a new matcher. The expected path is stored in canonical form.
    pub fn new(path: &str, options: MatchOptions) -> Self {
        Self {
            expected: canonicalize(path, options).into_owned(),
            options,
        }
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        canonicalize(path, self.options) == self.expected
    }
}

/// Bring a path into the form used for comparison.
///
/// Borrows when nothing needs to change. Only a single trailing slash is
/// dropped in non-strict mode, so `/map//` stays distinct from `/map`.
pub fn canonicalize(path: &str, options: MatchOptions) -> Cow<'_, str> {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !options.strict && !rest.is_empty() && !rest.ends_with('/') => rest,
        _ => path,
    };

    if !options.case_sensitive && trimmed.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(trimmed.to_ascii_lowercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}
