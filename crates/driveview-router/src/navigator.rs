//! Navigation driver.
//!
//! The [`Navigator`] sits between the host's history and the route table:
//! it turns locations into matches, keeps history in step, and hands out
//! [`PendingView`] handles for routes whose view has not been loaded yet.
//!
//! Every navigation gets a generation number. A pending load compares its
//! own generation with the latest one when it settles, so a load started by
//! an earlier navigation can never replace the view of a later one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::{LoadError, RouteError};
use crate::history::History;
use crate::params::Params;
use crate::path::{BasePath, Location};
use crate::view::{LazyView, View, ViewRef};
use crate::{RouteMatch, RouteTable};

/// What triggered a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// Initial page load
    Initial,
    Push,
    Replace,
    Back,
    Forward,
}

/// Outcome of a single navigation
#[derive(Debug)]
pub struct Navigation {
    /// Sequence number of this navigation
    pub generation: u64,
    pub kind: NavigationKind,
    /// Location relative to the base path
    pub location: Location,
    pub matched: RouteMatch,
    pub view: ViewState,
}

/// Whether the view can be rendered now
#[derive(Debug)]
pub enum ViewState {
    Ready(View),
    Pending(PendingView),
}

impl ViewState {
    pub fn is_pending(&self) -> bool {
        matches!(self, ViewState::Pending(_))
    }
}

/// Result of waiting on a [`PendingView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOutcome {
    Ready(View),
    /// A newer navigation happened; the loaded view must not be rendered
    Superseded,
}

/// Handle to a deferred view load started by one navigation
///
/// Creating the handle does not run the loader; awaiting
/// [`PendingView::resolve`] does.
#[derive(Debug)]
pub struct PendingView {
    route: String,
    generation: u64,
    latest: Arc<AtomicU64>,
    lazy: LazyView,
}

impl PendingView {
    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once a later navigation has started
    pub fn is_stale(&self) -> bool {
        self.latest.load(Ordering::Acquire) != self.generation
    }

    /// Loads the view and checks it is still wanted
    ///
    /// A stale handle skips the load entirely. A load that settles after a
    /// newer navigation is discarded, failures included.
    pub async fn resolve(self) -> Result<ViewOutcome, LoadError> {
        if self.is_stale() {
            tracing::debug!(route = %self.route, generation = self.generation, "skipping load for superseded navigation");
            return Ok(ViewOutcome::Superseded);
        }

        let loaded = self.lazy.load().await;

        if self.is_stale() {
            tracing::debug!(route = %self.route, generation = self.generation, "discarding view loaded for superseded navigation");
            return Ok(ViewOutcome::Superseded);
        }

        match loaded {
            Ok(view) => Ok(ViewOutcome::Ready(view)),
            Err(err) => {
                tracing::warn!(route = %self.route, error = %err, "view failed to load");
                Err(err)
            }
        }
    }
}

/// Drives route resolution from a [`History`]
pub struct Navigator<H: History> {
    table: Arc<RouteTable>,
    base: BasePath,
    history: H,
    generation: Arc<AtomicU64>,
    current: Option<RouteMatch>,
}

impl<H: History> Navigator<H> {
    pub fn new(table: Arc<RouteTable>, base: BasePath, history: H) -> Self {
        Self {
            table,
            base,
            history,
            generation: Arc::new(AtomicU64::new(0)),
            current: None,
        }
    }

    /// Resolves the history's current location (initial page load)
    pub fn start(&mut self) -> Navigation {
        let location = self.history.location();
        self.from_history(&location, NavigationKind::Initial)
    }

    /// Navigates to an application path and records a new history entry
    pub fn push(&mut self, to: &str) -> Navigation {
        let location = Location::parse(to);
        let full = location.with_path(&self.base.prepend(&location.path));
        self.history.push(&full);
        self.navigate(location, NavigationKind::Push)
    }

    /// Navigates to an application path, overwriting the current entry
    pub fn replace(&mut self, to: &str) -> Navigation {
        let location = Location::parse(to);
        let full = location.with_path(&self.base.prepend(&location.path));
        self.history.replace(&full);
        self.navigate(location, NavigationKind::Replace)
    }

    /// Goes back one entry; `None` when already at the first one
    pub fn back(&mut self) -> Option<Navigation> {
        let location = self.history.back()?;
        Some(self.from_history(&location, NavigationKind::Back))
    }

    /// Goes forward one entry; `None` when already at the last one
    pub fn forward(&mut self) -> Option<Navigation> {
        let location = self.history.forward()?;
        Some(self.from_history(&location, NavigationKind::Forward))
    }

    /// Base-prefixed URL of a named route
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        self.table.href(name, params).map(|path| self.base.prepend(&path))
    }

    /// Match of the latest navigation
    pub fn current(&self) -> Option<&RouteMatch> {
        self.current.as_ref()
    }

    /// Generation of the latest navigation, 0 before the first
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    fn from_history(&mut self, raw: &str, kind: NavigationKind) -> Navigation {
        let mut location = Location::parse(raw);
        match self.base.strip(&location.path).map(str::to_string) {
            Some(app_path) => location.path = app_path,
            None => {
                tracing::warn!(location = %raw, base = %self.base.as_str(), "location is outside the base path");
            }
        }
        self.navigate(location, kind)
    }

    fn navigate(&mut self, location: Location, kind: NavigationKind) -> Navigation {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let matched = self.table.resolve(&location.path);

        let view = match &matched.view {
            ViewRef::Eager(view) => ViewState::Ready(view.clone()),
            ViewRef::Lazy(lazy) => match lazy.loaded() {
                Some(view) => ViewState::Ready(view.clone()),
                None => ViewState::Pending(PendingView {
                    route: matched.name.clone(),
                    generation,
                    latest: Arc::clone(&self.generation),
                    lazy: lazy.clone(),
                }),
            },
        };

        tracing::info!(
            generation,
            kind = ?kind,
            route = %matched.name,
            path = %matched.path,
            pending = view.is_pending(),
            "navigated"
        );

        self.current = Some(matched.clone());

        Navigation {
            generation,
            kind,
            location,
            matched,
            view,
        }
    }
}
