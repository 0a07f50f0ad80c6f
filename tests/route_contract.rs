//! The URL contract the guide exposes: four literal paths, four views,
//! nothing else.

use std::sync::Arc;

use huashan_guide::routing::{
    HistoryMode, MatchOptions, Navigator, Route, RouteTable, Router, View,
};

fn router() -> Router {
    Router::new(
        RouteTable::standard(),
        HistoryMode::web(),
        MatchOptions::default(),
    )
}

#[test]
fn test_each_path_resolves_to_exactly_its_view() {
    let router = router();
    let contract = [
        ("/", View::Home),
        ("/map", View::Map),
        ("/routes", View::Routes),
        ("/ai-chat", View::AiChat),
    ];

    for (path, expected) in contract {
        let matches: Vec<&Route> = router
            .table()
            .iter()
            .filter(|route| router.resolve(path) == Some(*route))
            .collect();
        assert_eq!(matches.len(), 1, "path {path}");
        assert_eq!(matches[0].view, expected, "path {path}");

        for other in View::ALL.into_iter().filter(|v| *v != expected) {
            assert_ne!(router.resolve(path).map(|r| r.view), Some(other));
        }
    }
}

#[test]
fn test_matching_is_literal() {
    let router = router();
    for path in ["/map/1", "/routes/west-peak", "/ai-chat/history", "/:id", "/*"] {
        assert!(router.resolve(path).is_none(), "path {path}");
    }
}

#[test]
fn test_undeclared_paths_have_no_catch_all() {
    let router = router();
    for href in ["/missing", "/nope", "/404", "/index.html"] {
        let resolution = router.resolve_href(href).unwrap();
        assert_eq!(resolution.view(), None, "href {href}");
    }
}

#[test]
fn test_construction_is_idempotent() {
    let first = router();
    let second = router();
    assert_eq!(first.table(), second.table());

    for route in first.table() {
        assert_eq!(
            first.resolve(&route.path).map(|r| r.view),
            second.resolve(&route.path).map(|r| r.view)
        );
    }
}

#[test]
fn test_request_routes_mounts_only_routes() {
    let mut nav = Navigator::new(Arc::new(router()));
    let transition = nav.push("/routes").unwrap().unwrap();

    assert_eq!(transition.mounted, Some(View::Routes));
    for other in [View::Home, View::Map, View::AiChat] {
        assert_ne!(transition.mounted, Some(other));
    }
}

#[test]
fn test_request_nope_matches_nothing() {
    let mut nav = Navigator::new(Arc::new(router()));
    let transition = nav.push("/nope").unwrap().unwrap();

    assert_eq!(transition.view, None);
    assert_eq!(transition.mounted, None);
}

#[test]
fn test_hash_history_contract() {
    let router = Router::new(
        RouteTable::standard(),
        HistoryMode::hash(),
        MatchOptions::default(),
    );

    assert_eq!(
        router.resolve_href("http://guide.local/#/routes").unwrap().view(),
        Some(View::Routes)
    );
    assert_eq!(router.resolve_href("/#/nope").unwrap().view(), None);
}
