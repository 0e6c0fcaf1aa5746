//! Relative endpoint descriptor: a path plus ordered query parameters.

use std::fmt::Write as _;

/// Describes one API operation's relative path and query parameters.
///
/// Query parameters keep insertion order so that two logically-equal calls
/// render byte-identical URLs; tests and cache keys rely on this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: String,
    query: Vec<(&'static str, String)>,
}

impl Endpoint {
    /// Creates an endpoint for a relative path (with leading `/`).
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    /// Appends a query parameter when the value is present. Absent values
    /// are omitted entirely rather than encoded as empty strings.
    #[must_use]
    pub fn with_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// The relative path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query parameters in insertion order.
    #[must_use]
    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Renders the fully-qualified URL against a base URL.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{base_url}{}", self.path);
        for (i, (name, value)) in self.query.iter().enumerate() {
            let separator = if i == 0 { '?' } else { '&' };
            write!(url, "{separator}{name}={value}").unwrap();
        }
        url
    }
}
