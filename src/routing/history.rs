//! History modes: where a location's route path lives in a URL.
//!
//! # Responsibilities
//! - Extract the route path, query and fragment from an href
//! - Build the href a link needs to reach a route path
//!
//! # Design Decisions
//! - `Web` reads the real URL path (the mode the guide runs in)
//! - `Hash` reads the path from the fragment (`/#/map`); the real path must
//!   be the base itself, so the server only ever serves the base
//! - `Memory` behaves like `Web` but never touches a browser URL; it backs
//!   tests and command-line resolution
//! - The base is stored percent-encoded, the same form `Url::path` yields
//! - Relative hrefs are resolved against the current route path, or the
//!   root route when there is none
//! - Empty query strings and fragments are treated as absent

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

const ORIGIN: &str = "http://localhost";

/// Why an href could not be turned into a location.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("href {0:?} is not a usable URL")]
    InvalidHref(String),

    #[error("href {0:?} is not under the base path")]
    OutsideBase(String),
}

/// History strategy used by the router.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    #[default]
    Web,
    Hash,
    Memory,
}

/// A resolved position in the application: the route path plus the parts
/// of the URL that never take part in matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
            fragment: None,
        }
    }

    /// Path with query and fragment re-attached.
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(query) = &self.query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            full.push('#');
            full.push_str(fragment);
        }
        full
    }

    fn from_url(path: String, url: &Url) -> Self {
        Self {
            path,
            query: non_empty(url.query()),
            fragment: non_empty(url.fragment()),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_path())
    }
}

/// A history kind bound to a base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryMode {
    kind: HistoryKind,
    /// Percent-encoded base without trailing slash; empty for the site root.
    base: String,
}

impl HistoryMode {
    pub fn new(kind: HistoryKind, base: &str) -> Self {
        Self {
            kind,
            base: normalize_base(base),
        }
    }

    pub fn web() -> Self {
        Self::new(HistoryKind::Web, "/")
    }

    pub fn hash() -> Self {
        Self::new(HistoryKind::Hash, "/")
    }

    pub fn memory() -> Self {
        Self::new(HistoryKind::Memory, "/")
    }

    pub fn kind(&self) -> HistoryKind {
        self.kind
    }

    pub fn base(&self) -> &str {
        if self.base.is_empty() {
            "/"
        } else {
            &self.base
        }
    }

    /// Extract the location an href points at, with relative hrefs taken
    /// from the root route.
    pub fn location(&self, href: &str) -> Result<Location, LocationError> {
        self.location_from(href, None)
    }

    /// Extract the location an href points at, with relative hrefs taken
    /// from `current`.
    pub fn location_from(
        &self,
        href: &str,
        current: Option<&Location>,
    ) -> Result<Location, LocationError> {
        let invalid = || LocationError::InvalidHref(href.to_string());

        let url = if href.starts_with('/') {
            // Absolute path; keeps `//map` from being read as a host.
            Url::parse(&format!("{ORIGIN}{href}")).map_err(|_| invalid())?
        } else {
            match Url::parse(href) {
                Ok(url) => url,
                Err(url::ParseError::RelativeUrlWithoutBase) => {
                    return self.relative_location(href, current);
                }
                Err(_) => return Err(invalid()),
            }
        };

        if url.cannot_be_a_base() {
            return Err(invalid());
        }
        self.absolute_location(href, &url)
    }

    /// Href that reaches `path` under this history mode.
    pub fn href(&self, path: &str) -> String {
        match self.kind {
            HistoryKind::Web | HistoryKind::Memory => format!("{}{}", self.base, path),
            HistoryKind::Hash => format!("{}/#{}", self.base, path),
        }
    }

    fn absolute_location(&self, href: &str, url: &Url) -> Result<Location, LocationError> {
        let outside = || LocationError::OutsideBase(href.to_string());

        match self.kind {
            HistoryKind::Web | HistoryKind::Memory => {
                let path = self.strip_base(url.path()).ok_or_else(outside)?;
                Ok(Location::from_url(path, url))
            }
            HistoryKind::Hash => {
                if self.strip_base(url.path()).ok_or_else(outside)? != "/" {
                    return Err(outside());
                }
                Ok(split_hash_location(url.fragment().unwrap_or("")))
            }
        }
    }

    fn relative_location(
        &self,
        href: &str,
        current: Option<&Location>,
    ) -> Result<Location, LocationError> {
        let from = current.map_or("/", |location| location.path.as_str());

        match self.kind {
            HistoryKind::Web | HistoryKind::Memory => {
                let url = join(&format!("{ORIGIN}{}{from}", self.base), href)?;
                self.absolute_location(href, &url)
            }
            // `#/map` replaces the whole fragment, which holds the route.
            HistoryKind::Hash if href.starts_with('#') => {
                let url = join(&format!("{ORIGIN}{}/", self.base), href)?;
                self.absolute_location(href, &url)
            }
            // Otherwise join in route space.
            HistoryKind::Hash => {
                let url = join(&format!("{ORIGIN}{from}"), href)?;
                Ok(Location::from_url(url.path().to_string(), &url))
            }
        }
    }

    fn strip_base(&self, path: &str) -> Option<String> {
        if self.base.is_empty() {
            return Some(path.to_string());
        }

        let rest = path.strip_prefix(self.base.as_str())?;
        if rest.is_empty() {
            Some("/".to_string())
        } else if rest.starts_with('/') {
            Some(rest.to_string())
        } else {
            // `/apple` is not under `/app`
            None
        }
    }
}

impl Default for HistoryMode {
    fn default() -> Self {
        Self::web()
    }
}

fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }

    let absolute = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };

    // Encode the way request paths arrive (`/导览` becomes `/%E5%AF%BC%E8%A7%88`).
    match Url::parse(&format!("{ORIGIN}{absolute}")) {
        Ok(url) => url.path().trim_end_matches('/').to_string(),
        Err(_) => absolute,
    }
}

fn join(from: &str, href: &str) -> Result<Url, LocationError> {
    Url::parse(from)
        .and_then(|base| base.join(href))
        .map_err(|_| LocationError::InvalidHref(href.to_string()))
}

/// Split a hash-mode fragment (`/routes?day=2#top`) into a location.
fn split_hash_location(inner: &str) -> Location {
    let (rest, fragment) = match inner.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (inner, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let path = if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    Location {
        path,
        query: non_empty(query),
        fragment: non_empty(fragment),
    }
}

fn non_empty(part: Option<&str>) -> Option<String> {
    part.filter(|s| !s.is_empty()).map(str::to_owned)
}
