//! LLM prompt engineering for article selection

use postwright_domain::{Query, SearchResults};

/// Builds the selection prompt from search results and the run's query
pub struct SelectionPrompt {
    results_json: String,
    query: String,
}

impl SelectionPrompt {
    /// Create a prompt builder for one selection call
    pub fn new(results: &SearchResults, query: &Query) -> Self {
        Self {
            results_json: results.as_prompt_json(),
            query: query.as_str().to_string(),
        }
    }

    /// Build the complete selection prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(SELECTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        prompt.push_str(&format!("Query: \"{}\"\n\n", self.query));

        prompt.push_str("Search results:\n");
        prompt.push_str("---\n");
        prompt.push_str(&self.results_json);
        prompt.push_str("\n---\n\n");

        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const SELECTION_INSTRUCTIONS: &str = r#"You are a professional researcher and technology expert.
Below are the raw web search results for a query. Sift through them and
choose the best 3 articles that are most relevant and informative on the
topic. Prefer substantial articles over forums, video pages and product
listings."#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (JSON array of exactly 3 article links, no additional text):
["https://...", "https://...", "https://..."]

Remember: Return ONLY the links in the array and nothing else. No markdown
code blocks, no explanations."#;
