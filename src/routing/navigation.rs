//! Navigation session: the history stack and view mounting.
//!
//! # Data Flow
//! ```text
//! push / replace (href)      back / forward / go (delta)
//!     → router.resolve_href_from → move cursor
//!     → history entry            → re-resolve entry
//!     → Transition { unmounted, mounted }
//! ```
//!
//! # Design Decisions
//! - Single owner, `&mut self` only: mirrors the browser's event loop
//! - A view is (un)mounted only when the resolved view changes
//! - A miss unmounts the current view and mounts nothing
//! - Pushing the current location again adds no entry; locations compare
//!   by route path under the router's matching options
//! - Relative hrefs resolve against the current entry

use std::sync::Arc;

use thiserror::Error;

use crate::routing::history::{Location, LocationError};
use crate::routing::matcher::canonicalize;
use crate::routing::router::Router;
use crate::routing::view::View;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("href {0:?} cannot be parsed as a location")]
    InvalidHref(String),

    #[error("href {0:?} is not reachable under the router's base path")]
    OutsideBase(String),
}

impl From<LocationError> for NavigationError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::InvalidHref(href) => NavigationError::InvalidHref(href),
            LocationError::OutsideBase(href) => NavigationError::OutsideBase(href),
        }
    }
}

/// What changed on a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: Option<Location>,
    pub to: Location,
    /// View resolved for `to`, if any.
    pub view: Option<View>,
    pub unmounted: Option<View>,
    pub mounted: Option<View>,
}

#[derive(Debug, Clone)]
struct Entry {
    location: Location,
    view: Option<View>,
}

/// History stack bound to a router.
#[derive(Debug)]
pub struct Navigator {
    router: Arc<Router>,
    entries: Vec<Entry>,
    cursor: usize,
}

impl Navigator {
    pub fn new(router: Arc<Router>) -> Self {
        Self {
            router,
            entries: Vec::new(),
            cursor: 0,
        }
    }

    /// Navigate to `href`, dropping any forward entries.
    ///
    /// The first push on a fresh session is the initial navigation.
    /// Returns `Ok(None)` when `href` is the current location.
    pub fn push(&mut self, href: &str) -> Result<Option<Transition>, NavigationError> {
        let entry = self.entry_for(href)?;

        if self.is_current(&entry.location) {
            tracing::debug!(location = %entry.location, "Duplicate navigation ignored");
            return Ok(None);
        }

        let previous = self.current().cloned();
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
            self.cursor += 1;
        }
        self.entries.push(entry.clone());

        Ok(Some(self.transition(previous, entry)))
    }

    /// Navigate to `href` in place of the current entry.
    pub fn replace(&mut self, href: &str) -> Result<Transition, NavigationError> {
        let entry = self.entry_for(href)?;
        let previous = self.current().cloned();

        match self.entries.get_mut(self.cursor) {
            Some(slot) => *slot = entry.clone(),
            None => self.entries.push(entry.clone()),
        }

        Ok(self.transition(previous, entry))
    }

    pub fn back(&mut self) -> Option<Transition> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<Transition> {
        self.go(1)
    }

    /// Move `delta` entries through the history.
    ///
    /// Zero or out-of-range moves do nothing.
    pub fn go(&mut self, delta: isize) -> Option<Transition> {
        if delta == 0 {
            return None;
        }
        let target = self.cursor.checked_add_signed(delta)?;
        let entry = self.entries.get(target)?.clone();
        let previous = self.current().cloned();

        self.cursor = target;
        Some(self.transition(previous, entry))
    }

    pub fn current_location(&self) -> Option<&Location> {
        self.current().map(|entry| &entry.location)
    }

    pub fn current_view(&self) -> Option<View> {
        self.current().and_then(|entry| entry.view)
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of history entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    fn current(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    fn is_current(&self, location: &Location) -> bool {
        let options = self.router.options();
        self.current_location().is_some_and(|current| {
            canonicalize(&current.path, options) == canonicalize(&location.path, options)
                && current.query == location.query
                && current.fragment == location.fragment
        })
    }

    fn entry_for(&self, href: &str) -> Result<Entry, NavigationError> {
        let resolution = self
            .router
            .resolve_href_from(href, self.current_location())?;

        Ok(Entry {
            view: resolution.view(),
            location: resolution.location,
        })
    }

    fn transition(&self, previous: Option<Entry>, next: Entry) -> Transition {
        let before = previous.as_ref().and_then(|entry| entry.view);
        let (unmounted, mounted) = if before == next.view {
            (None, None)
        } else {
            (before, next.view)
        };

        match next.view {
            Some(view) => tracing::debug!(
                to = %next.location,
                view = %view,
                unmounted = ?unmounted,
                "Navigated"
            ),
            None => tracing::debug!(to = %next.location, "Navigated to a path with no route"),
        }

        Transition {
            from: previous.map(|entry| entry.location),
            to: next.location,
            view: next.view,
            unmounted,
            mounted,
        }
    }
}
