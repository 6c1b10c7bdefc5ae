//! Query module - the topic string that drives one pipeline run

use std::fmt;

/// The topic query for a single pipeline run
///
/// A `Query` is immutable once constructed and is passed as contextual
/// input to every LLM prompt in the run. Surrounding whitespace is
/// trimmed at construction; deciding what to do with an empty query
/// (e.g. substituting a sample topic) is the caller's concern.
///
/// # Examples
///
/// ```
/// use postwright_domain::Query;
///
/// let query = Query::new("  Tesla full self-driving 2023  ");
/// assert_eq!(query.as_str(), "Tesla full self-driving 2023");
/// assert!(!query.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Create a new query, trimming surrounding whitespace
    pub fn new(topic: impl Into<String>) -> Self {
        Self(topic.into().trim().to_string())
    }

    /// The query text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the query is empty after trimming
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
