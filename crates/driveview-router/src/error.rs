//! Error types for route table construction, URL generation and view loading
//!
//! Resolution itself never fails: every path lands on some route because the
//! table is required to end with a catch-all. What can go wrong is the
//! declaration (rejected once, when the table is built) and the deferred view
//! loads, which belong to the rendering side.

use thiserror::Error;

/// Configuration errors detected while building a [`RouteTable`](crate::RouteTable),
/// plus URL generation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("parameter `{param}` appears more than once in pattern `{pattern}`")]
    DuplicateParam { pattern: String, param: String },

    #[error("route with pattern `{pattern}` has an empty name")]
    EmptyName { pattern: String },

    #[error("route name `{0}` is declared more than once")]
    DuplicateName(String),

    #[error("route table has no catch-all route (e.g. `/:pathMatch(.*)*`)")]
    MissingCatchAll,

    #[error("catch-all route `{0}` must be declared last")]
    CatchAllNotLast(String),

    #[error("no route named `{0}`")]
    UnknownRoute(String),

    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam { route: String, param: String },
}

impl RouteError {
    pub(crate) fn invalid(pattern: &str, reason: impl Into<String>) -> Self {
        RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

/// A deferred view failed to load.
///
/// The navigator hands this back untouched; showing an error state is up to
/// whoever renders the view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load view `{view}`: {message}")]
pub struct LoadError {
    pub view: String,
    pub message: String,
}

impl LoadError {
    pub fn new(view: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            message: message.into(),
        }
    }
}
