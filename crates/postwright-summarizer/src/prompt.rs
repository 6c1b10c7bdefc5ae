//! LLM prompt engineering for chunk summaries

use postwright_domain::Query;

/// Builds the summary prompt for one chunk
pub struct SummaryPrompt<'a> {
    chunk_text: &'a str,
    query: &'a Query,
}

impl<'a> SummaryPrompt<'a> {
    /// Create a prompt builder for one chunk
    pub fn new(chunk_text: &'a str, query: &'a Query) -> Self {
        Self { chunk_text, query }
    }

    /// Build the complete summary prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(self.chunk_text);
        prompt.push_str("\n---\n\n");
        prompt.push_str(&SUMMARY_INSTRUCTIONS.replace("{query}", self.query.as_str()));

        prompt
    }
}

const SUMMARY_INSTRUCTIONS: &str = r#"You are a technology expert with the challenge of succinctly
summarising the content above. Your goal is to distill its main points
into a brief summary that will form the foundation of an engaging social
media post about {query}. The summary should be concise, to the point,
and capture the essence of the content.

Summary:"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_chunk_text() {
        let query = Query::new("topic");
        let prompt = SummaryPrompt::new("the chunk body", &query).build();
        assert!(prompt.starts_with("the chunk body"));
    }

    #[test]
    fn test_prompt_includes_query() {
        let query = Query::new("Tesla full self-driving 2023");
        let prompt = SummaryPrompt::new("text", &query).build();
        assert!(prompt.contains("Tesla full self-driving 2023"));
        assert!(!prompt.contains("{query}"));
    }

    #[test]
    fn test_prompt_asks_for_summary() {
        let query = Query::new("topic");
        let prompt = SummaryPrompt::new("text", &query).build();
        assert!(prompt.contains("Summary:"));
    }
}
