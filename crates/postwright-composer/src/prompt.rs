//! LLM prompt engineering for the final post

use postwright_domain::{ChunkSummary, Query};

/// Builds the composition prompt from the collected summaries
pub struct ComposePrompt<'a> {
    summaries: &'a [ChunkSummary],
    query: &'a Query,
}

impl<'a> ComposePrompt<'a> {
    /// Create a prompt builder for the composition call
    pub fn new(summaries: &'a [ChunkSummary], query: &'a Query) -> Self {
        Self { summaries, query }
    }

    /// Build the complete composition prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        for summary in self.summaries {
            prompt.push_str(&summary.text);
            prompt.push_str("\n\n");
        }

        prompt.push_str("---\n\n");
        prompt.push_str(&COMPOSE_INSTRUCTIONS.replace("{query}", self.query.as_str()));

        prompt
    }
}

const COMPOSE_INSTRUCTIONS: &str = r#"You are an esteemed tech journalist, tasked with turning the
summaries above into one compelling social media post about {query}.
To make the post impactful and draw the attention of coding enthusiasts
worldwide, adhere to these guidelines:
1) Ensure the content is captivating and packed with valuable insights.
2) Limit the text to fit a single social media post, concise yet informative.
3) Address the {query} topic directly.
4) Write for coding enthusiasts around the world, aiming for engagement.
5) Keep the text lucid, easily digestible, and free from jargon.
6) Offer readers actionable advice and unique insights on the topic.
7) End the post with 5 relevant hashtags chosen for reach with a tech audience.

Post:"#;

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn summary(text: &str) -> ChunkSummary {
        ChunkSummary {
            text: text.to_string(),
            chunk_index: 0,
            source_url: Url::parse("https://example.com").unwrap(),
        }
    }

    #[test]
    fn test_prompt_includes_all_summaries() {
        let summaries = vec![summary("summary alpha"), summary("summary beta")];
        let query = Query::new("topic");
        let prompt = ComposePrompt::new(&summaries, &query).build();
        assert!(prompt.contains("summary alpha"));
        assert!(prompt.contains("summary beta"));
    }

    #[test]
    fn test_prompt_includes_query() {
        let summaries = vec![summary("s")];
        let query = Query::new("Tesla full self-driving 2023");
        let prompt = ComposePrompt::new(&summaries, &query).build();
        assert!(prompt.contains("Tesla full self-driving 2023"));
        assert!(!prompt.contains("{query}"));
    }

    #[test]
    fn test_prompt_requests_hashtags() {
        let summaries = vec![summary("s")];
        let query = Query::new("topic");
        let prompt = ComposePrompt::new(&summaries, &query).build();
        assert!(prompt.contains("5 relevant hashtags"));
    }
}
