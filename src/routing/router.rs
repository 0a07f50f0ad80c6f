//! Route lookup.
//!
//! # Responsibilities
//! - Own the route table and its compiled matchers
//! - Resolve a location to zero or one route
//! - Build hrefs for views under the configured history mode
//!
//! # Design Decisions
//! - Immutable after construction (shared via `Arc` without locks)
//! - O(n) literal scan; the table has a handful of entries
//! - Explicit `None` on a miss rather than a silent default route

use crate::config::RouterConfig;
use crate::routing::history::{HistoryMode, Location, LocationError};
use crate::routing::matcher::{ExactPathMatcher, MatchOptions, Matcher};
use crate::routing::table::{Route, RouteTable};
use crate::routing::view::View;

/// Outcome of resolving an href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'r> {
    pub location: Location,
    pub route: Option<&'r Route>,
}

impl Resolution<'_> {
    pub fn view(&self) -> Option<View> {
        self.route.map(|route| route.view)
    }

    pub fn is_match(&self) -> bool {
        self.route.is_some()
    }
}

/// Resolves locations against a route table.
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
    matchers: Vec<ExactPathMatcher>,
    history: HistoryMode,
    options: MatchOptions,
}

impl Router {
    /// Compile matchers for every route; the table is moved in and frozen.
    pub fn new(table: RouteTable, history: HistoryMode, options: MatchOptions) -> Self {
        let matchers = table
            .iter()
            .map(|route| ExactPathMatcher::new(&route.path, options))
            .collect();

        tracing::debug!(
            routes = table.len(),
            history = ?history.kind(),
            base = history.base(),
            case_sensitive = options.case_sensitive,
            strict = options.strict,
            "Router compiled"
        );

        Self {
            table,
            matchers,
            history,
            options,
        }
    }

    /// Router over the standard guide table, configured from `[router]`.
    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(
            RouteTable::standard(),
            config.history_mode(),
            config.match_options(),
        )
    }

    /// Find the first route whose path matches `path`.
    ///
    /// `path` must already be a route path: no query, fragment or base.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.matchers
            .iter()
            .position(|matcher| matcher.matches(path))
            .map(|index| &self.table.routes()[index])
    }

    pub fn resolve_location(&self, location: &Location) -> Option<&Route> {
        self.resolve(&location.path)
    }

    /// Extract the location from `href` and resolve it.
    ///
    /// A miss is a `Resolution` without a route; an error means the href
    /// is unusable or outside the base path.
    pub fn resolve_href(&self, href: &str) -> Result<Resolution<'_>, LocationError> {
        self.resolve_href_from(href, None)
    }

    /// Like [`Router::resolve_href`], with relative hrefs taken from `current`.
    pub fn resolve_href_from(
        &self,
        href: &str,
        current: Option<&Location>,
    ) -> Result<Resolution<'_>, LocationError> {
        let location = self.history.location_from(href, current)?;
        let route = self.resolve_location(&location);
        Ok(Resolution { location, route })
    }

    /// Link target for the first route mounting `view`.
    pub fn href_for(&self, view: View) -> Option<String> {
        self.table
            .iter()
            .find(|route| route.view == view)
            .map(|route| self.history.href(&route.path))
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &HistoryMode {
        &self.history
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::history::HistoryKind;

    fn standard() -> Router {
        Router::new(
            RouteTable::standard(),
            HistoryMode::web(),
            MatchOptions::default(),
        )
    }

    #[test]
    fn test_each_path_resolves_to_its_view() {
        let router = standard();
        let cases = [
            ("/", View::Home),
            ("/map", View::Map),
            ("/routes", View::Routes),
            ("/ai-chat", View::AiChat),
        ];

        for (path, view) in cases {
            let route = router.resolve(path).unwrap();
            assert_eq!(route.view, view, "path {path}");
            assert_eq!(route.path, path);
        }
    }

    #[test]
    fn test_undeclared_paths_resolve_to_nothing() {
        let router = standard();
        for path in ["/missing", "/nope", "/map/extra", "/ai", "/route", ""] {
            assert!(router.resolve(path).is_none(), "path {path:?}");
        }
    }

    #[test]
    fn test_lenient_matching_by_default() {
        let router = standard();
        assert_eq!(router.resolve("/map/").unwrap().view, View::Map);
        assert_eq!(router.resolve("/AI-CHAT").unwrap().view, View::AiChat);
    }

    #[test]
    fn test_strict_case_sensitive_matching() {
        let router = Router::new(
            RouteTable::standard(),
            HistoryMode::web(),
            MatchOptions {
                case_sensitive: true,
                strict: true,
            },
        );
        assert!(router.resolve("/map/").is_none());
        assert!(router.resolve("/Map").is_none());
        assert_eq!(router.resolve("/map").unwrap().view, View::Map);
    }

    #[test]
    fn test_resolve_href_ignores_query_and_fragment() {
        let router = standard();
        let resolution = router.resolve_href("/map?x=1#top").unwrap();
        assert_eq!(resolution.view(), Some(View::Map));
        assert_eq!(resolution.location.query.as_deref(), Some("x=1"));
    }

    #[test]
    fn test_resolve_href_miss_keeps_location() {
        let router = standard();
        let resolution = router.resolve_href("/nope").unwrap();
        assert!(!resolution.is_match());
        assert_eq!(resolution.location.path, "/nope");
    }

    #[test]
    fn test_hash_mode_resolution() {
        let router = Router::new(
            RouteTable::standard(),
            HistoryMode::hash(),
            MatchOptions::default(),
        );
        let resolution = router.resolve_href("http://host/#/routes").unwrap();
        assert_eq!(resolution.view(), Some(View::Routes));

        assert_eq!(router.resolve_href("/").unwrap().view(), Some(View::Home));
        assert_eq!(
            router.resolve_href("/map"),
            Err(LocationError::OutsideBase("/map".into()))
        );
    }

    #[test]
    fn test_resolve_href_under_encoded_base() {
        let router = Router::new(
            RouteTable::standard(),
            HistoryMode::new(HistoryKind::Web, "/导览"),
            MatchOptions::default(),
        );
        for view in View::ALL {
            let href = router.href_for(view).unwrap();
            assert_eq!(router.resolve_href(&href).unwrap().view(), Some(view), "{href}");
        }
        assert_eq!(
            router.resolve_href("/%E5%AF%BC%E8%A7%88/map").unwrap().view(),
            Some(View::Map)
        );
    }

    #[test]
    fn test_href_for_views() {
        let router = standard();
        assert_eq!(router.href_for(View::Home).as_deref(), Some("/"));
        assert_eq!(router.href_for(View::AiChat).as_deref(), Some("/ai-chat"));

        let hashed = Router::new(
            RouteTable::standard(),
            HistoryMode::new(HistoryKind::Hash, "/guide"),
            MatchOptions::default(),
        );
        assert_eq!(hashed.href_for(View::Map).as_deref(), Some("/guide/#/map"));
    }

    #[test]
    fn test_href_for_unrouted_view() {
        let table = RouteTable::new(vec![Route::new("/", View::Home)]).unwrap();
        let router = Router::new(table, HistoryMode::web(), MatchOptions::default());
        assert!(router.href_for(View::Map).is_none());
    }

    #[test]
    fn test_custom_table_resolution() {
        let table = RouteTable::new(vec![
            Route::new("/map", View::Map),
            Route::new("/trails", View::Map),
            Route::new("/TRAILS-ALT", View::Routes),
        ])
        .unwrap();
        let router = Router::new(table, HistoryMode::memory(), MatchOptions::default());
        assert_eq!(router.resolve("/trails").unwrap().path, "/trails");
        assert_eq!(router.resolve("/trails-alt").unwrap().view, View::Routes);
    }
}
