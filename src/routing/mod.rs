//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteTable::standard()
//!     → Router::new(table, history, options)
//!     → compile one literal matcher per route
//!     → freeze as immutable Router (shared via Arc)
//!
//! Incoming location (request path or navigation href)
//!     → history.rs (extract route path under the history mode)
//!     → router.rs (route lookup)
//!     → matcher.rs (literal comparison)
//!     → Return: matched Route or None
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Literal paths only; no parameters, wildcards, guards or redirects
//! - Deterministic: same input always matches same route
//! - First match wins (table order)
//! - No catch-all: an undeclared path resolves to nothing

pub mod history;
pub mod matcher;
pub mod navigation;
pub mod router;
pub mod table;
pub mod view;

pub use history::{HistoryKind, HistoryMode, Location, LocationError};
pub use matcher::MatchOptions;
pub use navigation::{NavigationError, Navigator, Transition};
pub use router::{Resolution, Router};
pub use table::{Route, RouteTable, RouteTableError};
pub use view::View;
