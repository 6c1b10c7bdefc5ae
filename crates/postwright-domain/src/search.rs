//! Search results as returned by the search provider

use serde_json::Value;

/// The search provider's response for one query, kept opaque
///
/// The provider's schema is not under our control and may evolve, so the
/// response is carried as raw JSON and handed whole to the article
/// selector, which serializes it into its prompt. Nothing downstream
/// depends on individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    raw: Value,
}

impl SearchResults {
    /// Wrap a raw provider response
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The raw response JSON
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Serialize the full response for inclusion in an LLM prompt
    pub fn as_prompt_json(&self) -> String {
        self.raw.to_string()
    }

    /// Number of organic hits, when the response carries an `organic` array
    ///
    /// Used for logging only; absence of the field is not an error.
    pub fn organic_hits(&self) -> Option<usize> {
        self.raw.get("organic").and_then(Value::as_array).map(Vec::len)
    }
}
