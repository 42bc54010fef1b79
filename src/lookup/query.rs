//! Ordered query parameter collection
//!
//! The service distinguishes a missing parameter from an empty one, so the
//! collection never prunes by value: a parameter the caller set to `""` is
//! still attached as `name=`. Only parameters that were never set are left
//! off the request.

/// An ordered list of `(name, value)` query string pairs.
///
/// Insertion order is preserved and duplicate names replace the earlier
/// value in place, so parameters go out on the wire in the order they were
/// declared.
///
/// # Example
/// ```
/// use mlb_lookup::QueryParams;
///
/// let mut query = QueryParams::new();
/// query.set("game_type", "R");
/// query.set("season", "2017");
/// assert_eq!(query.get("game_type"), Some("R"));
/// assert_eq!(query.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing the value in place if the name is
    /// already present.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}
