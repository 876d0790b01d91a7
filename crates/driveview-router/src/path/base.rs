/// Base path handling and location parsing
///
/// The hosting environment may serve the application below a prefix such as
/// `/drive/`. Routes never see it: it is stripped before matching and
/// prepended again when URLs are generated or pushed into history.

use serde::Serialize;

use super::normalize_path;

/// A deployment prefix stripped from and prepended to every routed path
///
/// # Examples
///
/// ```
/// use driveview_router::path::BasePath;
///
/// let base = BasePath::new("/drive/");
/// assert_eq!(base.strip("/drive/list/a"), Some("/list/a"));
/// assert_eq!(base.strip("/drive"), Some("/"));
/// assert_eq!(base.strip("/driveway"), None);
/// assert_eq!(base.prepend("/list/a"), "/drive/list/a");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath {
    // Empty for the root base, otherwise normalized without trailing slash
    prefix: String,
}

impl BasePath {
    /// Creates a base path from an externally supplied prefix
    ///
    /// Any form is accepted (`drive`, `/drive/`, `\drive`); an empty
    /// string or `/` means the application is served at the root.
    pub fn new(raw: &str) -> Self {
        let normalized = normalize_path(raw.trim());
        if normalized == "/" {
            Self::root()
        } else {
            Self {
                prefix: normalized.into_owned(),
            }
        }
    }

    /// The root base path (`/`)
    pub fn root() -> Self {
        Self {
            prefix: String::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Returns the prefix, `/` for the root base
    pub fn as_str(&self) -> &str {
        if self.prefix.is_empty() {
            "/"
        } else {
            &self.prefix
        }
    }

    /// Removes the prefix from a path
    ///
    /// The prefix must end at a segment boundary. Returns `None` when the
    /// path lies outside the base.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.prefix.is_empty() {
            return Some(path);
        }

        let rest = path.strip_prefix(self.prefix.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }

    /// Prepends the prefix to an application path
    ///
    /// The root route maps to the prefix with a trailing slash (`/drive/`),
    /// which is how browsers address a directory-style base.
    pub fn prepend(&self, path: &str) -> String {
        let path = normalize_path(path);
        if self.prefix.is_empty() {
            path.into_owned()
        } else if path == "/" {
            format!("{}/", self.prefix)
        } else {
            format!("{}{}", self.prefix, path)
        }
    }
}

/// A navigation target split into its routed path, query and hash
///
/// Only `path` takes part in matching.
///
/// ```
/// use driveview_router::path::Location;
///
/// let loc = Location::parse("/list/a?sort=name#top");
/// assert_eq!(loc.path, "/list/a");
/// assert_eq!(loc.query.as_deref(), Some("sort=name"));
/// assert_eq!(loc.hash.as_deref(), Some("top"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl Location {
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        Self {
            path: path.to_string(),
            query,
            hash,
        }
    }

    /// Reassembles the location, putting `path` in place of the routed path
    pub fn with_path(&self, path: &str) -> String {
        let mut out = path.to_string();
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(hash) = &self.hash {
            out.push('#');
            out.push_str(hash);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_base_is_transparent() {
        let base = BasePath::new("/");
        assert!(base.is_root());
        assert_eq!(base.as_str(), "/");
        assert_eq!(base.strip("/list/a"), Some("/list/a"));
        assert_eq!(base.prepend("/list/a"), "/list/a");
        assert_eq!(base.prepend("/"), "/");
        assert_eq!(BasePath::new(""), BasePath::root());
    }

    #[test]
    fn test_base_normalization() {
        assert_eq!(BasePath::new("drive").as_str(), "/drive");
        assert_eq!(BasePath::new("/drive/").as_str(), "/drive");
        assert_eq!(BasePath::new(" /drive// ").as_str(), "/drive");
    }

    #[test]
    fn test_strip_respects_segment_boundary() {
        let base = BasePath::new("/drive");
        assert_eq!(base.strip("/drive"), Some("/"));
        assert_eq!(base.strip("/drive/"), Some("/"));
        assert_eq!(base.strip("/drive/video/clip1"), Some("/video/clip1"));
        assert_eq!(base.strip("/drives"), None);
        assert_eq!(base.strip("/other"), None);
    }

    #[test]
    fn test_prepend_then_strip() {
        let base = BasePath::new("/drive/");
        for path in ["/", "/list", "/list/a/b", "/video/clip1"] {
            let full = base.prepend(path);
            assert_eq!(normalize_path(base.strip(&full).unwrap()), path);
        }
    }

    #[test]
    fn test_location_parse_plain() {
        let loc = Location::parse("/video/clip1");
        assert_eq!(loc.path, "/video/clip1");
        assert_eq!(loc.query, None);
        assert_eq!(loc.hash, None);
    }

    #[test]
    fn test_location_question_mark_inside_hash() {
        let loc = Location::parse("/list#frag?not-a-query");
        assert_eq!(loc.path, "/list");
        assert_eq!(loc.query, None);
        assert_eq!(loc.hash.as_deref(), Some("frag?not-a-query"));
    }

    #[test]
    fn test_location_with_path() {
        let loc = Location::parse("/list/a?sort=name#top");
        assert_eq!(loc.with_path("/drive/list/a"), "/drive/list/a?sort=name#top");
    }
}
