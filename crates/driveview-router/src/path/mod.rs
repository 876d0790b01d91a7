//! Path utilities for validation, normalization and splitting
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

pub mod base;
pub use base::{BasePath, Location};

/// Validates if a path is in canonical form
///
/// **Pure function**: No side effects, deterministic output.
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use driveview_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/list"));
/// assert!(is_valid_path("/list/movies/2023"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("list")); // Missing leading /
/// assert!(!is_valid_path("/list/")); // Trailing /
/// assert!(!is_valid_path("/list//movies")); // Double //
/// assert!(!is_valid_path("/list\\movies")); // Backslash
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations).
/// Returns `Cow::Owned` when normalization needed (single allocation).
///
/// - Trailing slashes: `/path/` → `/path`
/// - Double slashes: `/path//to` → `/path/to`
/// - Backslashes: `\path\to` → `/path/to`
/// - Missing leading slash: `path` → `/path`
///
/// # Examples
///
/// ```
/// use driveview_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/list");
/// assert!(matches!(path, Cow::Borrowed("/list")));
///
/// assert_eq!(normalize_path("/list/"), "/list");
/// assert_eq!(normalize_path("\\video\\clip1"), "/video/clip1");
/// assert_eq!(normalize_path("/list//movies///2023"), "/list/movies/2023");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Splits a path into its non-empty segments
///
/// ```
/// use driveview_router::path::segments;
///
/// let segs: Vec<&str> = segments("/list/movies/2023").collect();
/// assert_eq!(segs, vec!["list", "movies", "2023"]);
/// assert_eq!(segments("/").count(), 0);
/// ```
pub fn segments(path: &str) -> impl Iterator<Item = &str> + '_ {
    path.split('/').filter(|s| !s.is_empty())
}

/// Percent-decodes a single segment, keeping it verbatim when the result is not UTF-8
pub fn decode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment))
}

/// Percent-encodes a single segment for use in a generated URL
pub fn encode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}
