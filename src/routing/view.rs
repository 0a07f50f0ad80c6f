//! Page views the route table can mount.
//!
//! Views are opaque: the router only needs a stable identity for each one.
//! What a page shows is decided by the client bundle mounted into it.

use serde::Serialize;

/// A renderable page of the guide application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    Map,
    Routes,
    AiChat,
}

impl View {
    /// All views, in navigation order.
    pub const ALL: [View; 4] = [View::Home, View::Map, View::Routes, View::AiChat];

    /// Stable identifier, used for `data-view` attributes and metric labels.
    pub fn id(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Map => "map",
            View::Routes => "routes",
            View::AiChat => "ai-chat",
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Map => "Map",
            View::Routes => "Routes",
            View::AiChat => "AI Chat",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.id())
    }
}
