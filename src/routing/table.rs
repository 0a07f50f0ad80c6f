//! The application's route table.
//!
//! # Design Decisions
//! - Built once at startup, then moved into the router; there is no
//!   mutation API
//! - Order is preserved and first match wins, though the standard paths
//!   are disjoint literals so order never decides anything today
//! - Only literal paths are accepted

use serde::Serialize;
use thiserror::Error;

use crate::routing::matcher::{canonicalize, MatchOptions};
use crate::routing::view::View;

/// Errors raised when a route table is assembled.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route table is empty")]
    EmptyTable,

    #[error("route path {0:?} must start with '/' and contain no empty segments")]
    InvalidPath(String),

    #[error("route path {0:?} is not a literal path")]
    DynamicSegment(String),

    #[error("route path {path:?} collides with {existing:?}")]
    DuplicatePath { path: String, existing: String },
}

/// A declared association between a URL path and the view it mounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: String,
    pub view: View,
}

impl Route {
    pub fn new(path: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            view,
        }
    }
}

/// Ordered, validated, immutable list of routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Validate and freeze a list of routes.
    ///
    /// Uniqueness is checked under the most lenient matching options, so a
    /// table stays unambiguous whatever options the router is built with.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        if routes.is_empty() {
            return Err(RouteTableError::EmptyTable);
        }

        for (index, route) in routes.iter().enumerate() {
            validate_path(&route.path)?;

            let key = canonicalize(&route.path, MatchOptions::default());
            if let Some(existing) = routes[..index]
                .iter()
                .find(|earlier| canonicalize(&earlier.path, MatchOptions::default()) == key)
            {
                return Err(RouteTableError::DuplicatePath {
                    path: route.path.clone(),
                    existing: existing.path.clone(),
                });
            }
        }

        Ok(Self { routes })
    }

    /// The guide's four pages.
    pub fn standard() -> Self {
        Self {
            routes: vec![
                Route::new("/", View::Home),
                Route::new("/map", View::Map),
                Route::new("/routes", View::Routes),
                Route::new("/ai-chat", View::AiChat),
            ],
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

fn validate_path(path: &str) -> Result<(), RouteTableError> {
    if !path.starts_with('/') || path.contains('\\') {
        return Err(RouteTableError::InvalidPath(path.to_string()));
    }

    // Interior empty segments (`/a//b`); a single trailing slash is allowed.
    let body = path.strip_suffix('/').unwrap_or(path);
    if path != "/" && body.split('/').skip(1).any(str::is_empty) {
        return Err(RouteTableError::InvalidPath(path.to_string()));
    }

    let dynamic = path
        .split('/')
        .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
        || path.contains(&['?', '#', '(', ')', '+'][..]);
    if dynamic {
        return Err(RouteTableError::DynamicSegment(path.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_passes_validation() {
        let standard = RouteTable::standard();
        let rebuilt = RouteTable::new(standard.routes().to_vec()).unwrap();
        assert_eq!(rebuilt, standard);
    }

    #[test]
    fn test_standard_table_is_stable() {
        assert_eq!(RouteTable::standard(), RouteTable::standard());
    }

    #[test]
    fn test_standard_table_order() {
        let table = RouteTable::standard();
        let paths: Vec<&str> = table.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/map", "/routes", "/ai-chat"]);
    }

    #[test]
    fn test_rejects_empty_table() {
        assert_eq!(RouteTable::new(vec![]), Err(RouteTableError::EmptyTable));
    }

    #[test]
    fn test_rejects_relative_and_malformed_paths() {
        for path in ["map", "", "/a//b", "\\map"] {
            let result = RouteTable::new(vec![Route::new(path, View::Map)]);
            assert_eq!(
                result,
                Err(RouteTableError::InvalidPath(path.to_string())),
                "path {path:?}"
            );
        }
    }

    #[test]
    fn test_rejects_dynamic_segments() {
        for path in ["/routes/:id", "/docs/*rest", "/map?x=1", "/a(b)"] {
            let result = RouteTable::new(vec![Route::new(path, View::Map)]);
            assert!(
                matches!(result, Err(RouteTableError::DynamicSegment(_))),
                "path {path:?}"
            );
        }
    }

    #[test]
    fn test_rejects_colliding_paths() {
        let result = RouteTable::new(vec![
            Route::new("/map", View::Map),
            Route::new("/Map/", View::Routes),
        ]);
        assert_eq!(
            result,
            Err(RouteTableError::DuplicatePath {
                path: "/Map/".into(),
                existing: "/map".into(),
            })
        );
    }

    #[test]
    fn test_same_view_on_two_paths_is_allowed() {
        let table = RouteTable::new(vec![
            Route::new("/", View::Home),
            Route::new("/home", View::Home),
        ])
        .unwrap();
        assert_eq!(table.len(), 2);
    }
}
