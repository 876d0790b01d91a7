//! View references: eager handles and deferred loaders.
//!
//! A route points at the view that renders it. Most views are available up
//! front; others are fetched on demand the first time they are needed (the
//! not-found page, for instance). The router never runs a loader while
//! resolving a path; loaders are only started when a [`PendingView`] is
//! awaited.
//!
//! [`PendingView`]: crate::navigator::PendingView

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tokio::sync::OnceCell;

use crate::error::LoadError;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Future produced by a deferred loader
pub type LoadFuture = BoxFuture<'static, Result<View, LoadError>>;

/// Deferred loader: invoked to start fetching a view
pub type ViewLoader = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

/// Opaque handle to a renderable view component
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct View(Arc<str>);

impl View {
    pub fn new(component: impl Into<Arc<str>>) -> Self {
        Self(component.into())
    }

    pub fn component(&self) -> &str {
        &self.0
    }
}

impl Serialize for View {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A view that is loaded on first use and memoized afterwards
///
/// Only a successful load is kept. A failed load leaves the cell empty, so
/// the next navigation to the route tries again.
#[derive(Clone)]
pub struct LazyView {
    loader: ViewLoader,
    cell: Arc<OnceCell<View>>,
}

impl LazyView {
    pub fn new(loader: ViewLoader) -> Self {
        Self {
            loader,
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// The view, if a previous load completed
    pub fn loaded(&self) -> Option<&View> {
        self.cell.get()
    }

    /// Returns a future that loads the view, or yields the memoized one
    ///
    /// Nothing runs until the future is polled.
    pub fn load(&self) -> LoadFuture {
        let loader = Arc::clone(&self.loader);
        let cell = Arc::clone(&self.cell);
        Box::pin(async move {
            cell.get_or_try_init(|| loader()).await.cloned()
        })
    }
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("loaded", &self.cell.get())
            .finish_non_exhaustive()
    }
}

/// How a route obtains its view
#[derive(Debug, Clone)]
pub enum ViewRef {
    Eager(View),
    Lazy(LazyView),
}

impl ViewRef {
    /// An eagerly available view
    pub fn eager(component: impl Into<Arc<str>>) -> Self {
        ViewRef::Eager(View::new(component))
    }

    /// A deferred view
    ///
    /// # Examples
    ///
    /// ```
    /// use driveview_router::{View, ViewRef};
    ///
    /// let not_found = ViewRef::lazy(|| async { Ok(View::new("NotFoundView")) });
    /// assert!(not_found.is_lazy());
    /// ```
    pub fn lazy<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<View, LoadError>> + Send + 'static,
    {
        let loader: ViewLoader = Arc::new(move || Box::pin(loader()) as LoadFuture);
        ViewRef::Lazy(LazyView::new(loader))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, ViewRef::Lazy(_))
    }

    /// The view if it can be rendered right away
    pub fn ready(&self) -> Option<&View> {
        match self {
            ViewRef::Eager(view) => Some(view),
            ViewRef::Lazy(lazy) => lazy.loaded(),
        }
    }
}

impl Serialize for ViewRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ViewRef", 2)?;
        state.serialize_field("kind", if self.is_lazy() { "lazy" } else { "eager" })?;
        state.serialize_field("view", &self.ready())?;
        state.end()
    }
}
