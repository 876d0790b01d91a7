//! Route definitions
//!
//! A route binds a symbolic name to a compiled pattern and a view reference.
//! Routes are immutable once the table holding them is built.

pub mod parser;
pub mod pattern;

pub use parser::Pattern;
pub use pattern::{classify_segment, is_valid_param_name, PatternSegmentType};

use crate::view::ViewRef;

/// A single declared route
#[derive(Debug, Clone)]
pub struct Route {
    name: String,
    pattern: Pattern,
    view: ViewRef,
}

impl Route {
    pub(crate) fn new(name: String, pattern: Pattern, view: ViewRef) -> Self {
        Self {
            name,
            pattern,
            view,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn view(&self) -> &ViewRef {
        &self.view
    }

    /// True for the universal fallback route
    pub fn is_catch_all(&self) -> bool {
        self.pattern.is_catch_all()
    }
}
