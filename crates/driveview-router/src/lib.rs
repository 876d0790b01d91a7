//! # Driveview Router
//!
//! Client-side navigation resolution for the driveview file browser:
//! - Literal routes (`/`)
//! - Single-segment captures (`/item/:id`)
//! - Trailing multi-segment captures (`/list/:p*`, `/*rest`, `/:pathMatch(.*)*`)
//! - A mandatory catch-all, so every path resolves
//! - Eager and lazily loaded views, with stale loads discarded
//!
//! ## Matching Model
//!
//! Routes are tried in declaration order and the first one that matches
//! wins. A trailing capture claims the whole remaining suffix, possibly
//! empty; there is no backtracking. The table must end with a universal
//! catch-all, which is what makes [`RouteTable::resolve`] total: it returns a
//! [`RouteMatch`], never an `Option`.
//!
//! ## Path Normalization
//!
//! Handles common mistakes before matching:
//! - Trailing slashes: `/list/` → `/list`
//! - Double slashes: `/list//a` → `/list/a`
//! - Backslashes: `\list\a` → `/list/a`
//!
//! Captured segments are percent-decoded (`My%20Movies` → `My Movies`).
//!
//! ## Example
//!
//! ```
//! use driveview_router::{ParamValue, RouteTable, View, ViewRef};
//!
//! let table = RouteTable::builder()
//!     .route("home", "/", ViewRef::eager("FolderView"))
//!     .route("list", "/list/:p*", ViewRef::eager("FolderView"))
//!     .route("video", "/video/:p*", ViewRef::eager("VideoView"))
//!     .route("not-found", "/*rest", ViewRef::lazy(|| async { Ok(View::new("NotFoundView")) }))
//!     .build()
//!     .unwrap();
//!
//! let m = table.resolve("/list/movies/2023");
//! assert_eq!(m.name, "list");
//! assert_eq!(m.params.get("p"), Some(&ParamValue::from(vec!["movies", "2023"])));
//!
//! let m = table.resolve("/unknown/path");
//! assert_eq!(m.name, "not-found");
//! assert_eq!(m.params.get("rest"), Some(&ParamValue::from(vec!["unknown", "path"])));
//! ```

use std::collections::HashMap;

use serde::Serialize;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod error;
pub mod history;
pub mod navigator;
mod params;
pub mod path;
pub mod route;
pub mod routes;
mod view;

pub use config::{ConfigError, RouterConfig, RoutingConfig};
pub use error::{LoadError, RouteError};
pub use history::{History, MemoryHistory};
pub use navigator::{Navigation, NavigationKind, Navigator, PendingView, ViewOutcome, ViewState};
pub use params::{ParamValue, Params};
pub use path::{is_valid_path, normalize_path, BasePath, Location};
pub use route::{Pattern, PatternSegmentType, Route};
pub use view::{LazyView, LoadFuture, View, ViewLoader, ViewRef};

// ============================================================================
// Core Types
// ============================================================================

/// Result of resolving a path against a [`RouteTable`]
#[derive(Debug, Clone, Serialize)]
pub struct RouteMatch {
    /// Name of the matched route
    pub name: String,
    /// Normalized path that was resolved
    pub path: String,
    /// Pattern of the matched route
    pub pattern: String,
    /// Captured parameters
    pub params: Params,
    /// View reference of the matched route
    pub view: ViewRef,
}

impl RouteMatch {
    /// Gets a captured parameter
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }
}

impl PartialEq for RouteMatch {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.path == other.path
            && self.pattern == other.pattern
            && self.params == other.params
    }
}

// ============================================================================
// Route Table
// ============================================================================

/// Ordered, immutable set of routes
///
/// Built once at startup through [`RouteTable::builder`] and then shared
/// (usually behind an `Arc`) for the life of the process. Nothing mutates it
/// after construction, so it needs no locking.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_name: HashMap<String, usize>,
    case_insensitive: bool,
}

impl RouteTable {
    /// Starts declaring a table
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Resolves a path to exactly one route
    ///
    /// The path is expected to have had any base prefix removed already; it
    /// is normalized here. Routes are tried in declaration order and the
    /// first match wins. Paths no other route accepts land on the catch-all,
    /// which captures every segment.
    ///
    /// Pure: no side effects, same input gives the same match. Deferred
    /// views are not loaded here.
    pub fn resolve(&self, path: &str) -> RouteMatch {
        let normalized = normalize_path(path);
        let segments: Vec<&str> = crate::path::segments(&normalized).collect();

        // the last route is the catch-all and accepts every path
        let (declared, _) = self.routes.split_at(self.routes.len() - 1);
        let (route, params) = declared
            .iter()
            .find_map(|route| {
                route
                    .pattern()
                    .matches(&segments, self.case_insensitive)
                    .map(|params| (route, params))
            })
            .unwrap_or_else(|| self.catch_all(&segments));

        tracing::debug!(route = %route.name(), path = %normalized, "resolved path");

        RouteMatch {
            name: route.name().to_string(),
            path: normalized.into_owned(),
            pattern: route.pattern().as_str().to_string(),
            params,
            view: route.view().clone(),
        }
    }

    /// Binds every segment to the catch-all's capture
    fn catch_all(&self, segments: &[&str]) -> (&Route, Params) {
        let route = self.not_found();
        let mut params = Params::new();
        if let Some(name) = route.pattern().param_names().next() {
            let captured = segments
                .iter()
                .map(|s| crate::path::decode_segment(s).into_owned())
                .collect();
            params.insert(name.to_string(), ParamValue::Multi(captured));
        }
        (route, params)
    }

    /// Generates the application path of a named route
    ///
    /// # Examples
    ///
    /// ```
    /// use driveview_router::{routes, Params, ParamValue};
    ///
    /// let table = routes::file_browser(false).unwrap();
    ///
    /// let mut params = Params::new();
    /// params.insert("p".to_string(), ParamValue::from(vec!["My Movies", "2023"]));
    /// assert_eq!(table.href("list", &params).unwrap(), "/list/My%20Movies/2023");
    /// assert_eq!(table.href("home", &Params::new()).unwrap(), "/");
    /// ```
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let route = self
            .get(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;

        route
            .pattern()
            .generate(params)
            .map_err(|param| RouteError::MissingParam {
                route: name.to_string(),
                param,
            })
    }

    /// Looks up a route by name
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&idx| &self.routes[idx])
    }

    /// All routes in declaration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The catch-all route (always the last one)
    pub fn not_found(&self) -> &Route {
        &self.routes[self.routes.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }
}

/// Collects route declarations and validates them into a [`RouteTable`]
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    declared: Vec<(String, String, ViewRef)>,
    case_insensitive: bool,
}

impl RouteTableBuilder {
    /// Declares a route; declaration order is match order
    pub fn route(mut self, name: impl Into<String>, pattern: impl Into<String>, view: ViewRef) -> Self {
        self.declared.push((name.into(), pattern.into(), view));
        self
    }

    /// Compares literal segments ignoring ASCII case
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Validates the declarations and freezes them
    ///
    /// Fails fast on the first bad declaration: malformed patterns, empty or
    /// repeated names, a missing catch-all, or a catch-all that is not last.
    pub fn build(self) -> Result<RouteTable, RouteError> {
        let mut routes = Vec::with_capacity(self.declared.len());
        let mut by_name = HashMap::with_capacity(self.declared.len());

        for (name, raw, view) in self.declared {
            let pattern = Pattern::parse(&raw)?;

            if name.trim().is_empty() {
                return Err(RouteError::EmptyName { pattern: raw });
            }
            if by_name.insert(name.clone(), routes.len()).is_some() {
                return Err(RouteError::DuplicateName(name));
            }

            tracing::debug!(route = %name, pattern = %pattern.as_str(), lazy = view.is_lazy(), "registered route");
            routes.push(Route::new(name, pattern, view));
        }

        match routes.iter().position(Route::is_catch_all) {
            None => return Err(RouteError::MissingCatchAll),
            Some(idx) if idx + 1 != routes.len() => {
                return Err(RouteError::CatchAllNotLast(routes[idx].name().to_string()));
            }
            Some(_) => {}
        }

        tracing::info!(routes = routes.len(), case_insensitive = self.case_insensitive, "route table built");

        Ok(RouteTable {
            routes,
            by_name,
            case_insensitive: self.case_insensitive,
        })
    }
}
