//! Pattern segment classification
//!
//! Pure functional parsing of declared route pattern segments into typed segments.
//! All functions are **pure**: same input → same output, no side effects.

/// Represents the different kinds of route pattern segments
///
/// # Examples
///
/// ```
/// use driveview_router::route::pattern::{classify_segment, PatternSegmentType};
///
/// assert!(matches!(classify_segment("list"), PatternSegmentType::Static(_)));
/// assert!(matches!(classify_segment(":id"), PatternSegmentType::Param(_)));
///
/// // All three spellings of a trailing capture
/// assert!(matches!(classify_segment(":p*"), PatternSegmentType::CatchAll(_)));
/// assert!(matches!(classify_segment("*rest"), PatternSegmentType::CatchAll(_)));
/// assert!(matches!(classify_segment(":pathMatch(.*)*"), PatternSegmentType::CatchAll(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegmentType {
    /// Trailing capture of zero or more segments: `:p*`, `*rest` or `:pathMatch(.*)*`
    CatchAll(String),
    /// Single-segment capture: `:id`
    Param(String),
    /// Literal text
    Static(String),
}

impl PatternSegmentType {
    /// Parameter name for captures, `None` for literals
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PatternSegmentType::CatchAll(name) | PatternSegmentType::Param(name) => Some(name),
            PatternSegmentType::Static(_) => None,
        }
    }
}

/// Classifies a segment into a pattern type (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Catch-all, star form**: `*name`
/// 2. **Catch-all, regex form**: `:name(.*)*`
/// 3. **Catch-all, repeat form**: `:name*`
/// 4. **Param**: `:name`
/// 5. **Static**: Any other text
///
/// Names are not validated here; the pattern parser rejects bad ones.
pub fn classify_segment(segment: &str) -> PatternSegmentType {
    if let Some(name) = segment.strip_prefix('*') {
        return PatternSegmentType::CatchAll(name.to_string());
    }

    match segment.strip_prefix(':') {
        Some(inner) => {
            if let Some(name) = inner.strip_suffix("(.*)*") {
                return PatternSegmentType::CatchAll(name.to_string());
            }
            if let Some(name) = inner.strip_suffix('*') {
                return PatternSegmentType::CatchAll(name.to_string());
            }
            PatternSegmentType::Param(inner.to_string())
        }
        None => PatternSegmentType::Static(segment.to_string()),
    }
}

/// Checks a capture name: non-empty ASCII alphanumerics and `_`
pub fn is_valid_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
