//! Location/history abstraction supplied by the host.
//!
//! The navigator only needs the current location and the ability to record
//! new entries; a browser binding, a test double or the in-memory stack
//! below all fit.

/// Browser-style session history
///
/// Entries are full paths as the host sees them, base prefix included.
pub trait History {
    /// The current location
    fn location(&self) -> String;

    /// Adds an entry after the current one, dropping any forward entries
    fn push(&mut self, location: &str);

    /// Overwrites the current entry
    fn replace(&mut self, location: &str);

    /// Moves one entry back; returns the new location, `None` at the start
    fn back(&mut self) -> Option<String>;

    /// Moves one entry forward; returns the new location, `None` at the end
    fn forward(&mut self) -> Option<String>;
}

/// In-memory history stack
///
/// # Examples
///
/// ```
/// use driveview_router::{History, MemoryHistory};
///
/// let mut history = MemoryHistory::new("/");
/// history.push("/list/a");
/// history.push("/video/clip1");
/// assert_eq!(history.back().as_deref(), Some("/list/a"));
/// history.push("/list/b");
/// assert_eq!(history.forward(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, location: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, location: &str) {
        self.entries[self.cursor] = location.to_string();
    }

    fn back(&mut self) -> Option<String> {
        self.cursor = self.cursor.checked_sub(1)?;
        Some(self.location())
    }

    fn forward(&mut self) -> Option<String> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_location() {
        let history = MemoryHistory::new("/drive/");
        assert_eq!(history.location(), "/drive/");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_push_and_navigate() {
        let mut history = MemoryHistory::default();
        history.push("/list/a");
        history.push("/list/a/b");

        assert_eq!(history.back().as_deref(), Some("/list/a"));
        assert_eq!(history.back().as_deref(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.location(), "/");

        assert_eq!(history.forward().as_deref(), Some("/list/a"));
        assert_eq!(history.forward().as_deref(), Some("/list/a/b"));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = MemoryHistory::default();
        history.push("/a");
        history.push("/b");
        history.back();
        history.push("/c");
        assert_eq!(history.entries(), ["/", "/a", "/c"]);
    }

    #[test]
    fn test_replace() {
        let mut history = MemoryHistory::default();
        history.push("/a");
        history.replace("/b");
        assert_eq!(history.entries(), ["/", "/b"]);
        assert_eq!(history.location(), "/b");
    }
}
