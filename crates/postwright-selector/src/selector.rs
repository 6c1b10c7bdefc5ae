//! Core ArticleSelector implementation

use crate::error::SelectionError;
use crate::parser::parse_url_selection;
use crate::prompt::SelectionPrompt;
use postwright_domain::traits::LlmProvider;
use postwright_domain::{CompletionRequest, Query, SearchResults};
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Sampling temperature for selection calls
pub const SELECTION_TEMPERATURE: f32 = 0.4;

/// How many article links the model is asked for
pub const TOP_ARTICLE_COUNT: usize = 3;

/// Picks the most relevant article links from a search result set
pub struct ArticleSelector<L> {
    llm: Arc<L>,
}

impl<L> ArticleSelector<L>
where
    L: LlmProvider + Send + Sync,
{
    /// Create a selector over the given LLM provider
    pub fn new(llm: Arc<L>) -> Self {
        Self { llm }
    }

    /// Ask the model for the top article links
    ///
    /// The prompt requests exactly [`TOP_ARTICLE_COUNT`] links; when the
    /// model returns a different count the run proceeds with whatever
    /// parsed, and only zero usable URLs fails the stage.
    pub async fn select(
        &self,
        results: &SearchResults,
        query: &Query,
    ) -> Result<Vec<Url>, SelectionError> {
        let prompt = SelectionPrompt::new(results, query).build();
        debug!(prompt_chars = prompt.len(), "Selection prompt built");

        let response = self
            .llm
            .complete(CompletionRequest::new(prompt, SELECTION_TEMPERATURE))
            .await
            .map_err(|e| SelectionError::Llm(e.to_string()))?;

        debug!(response_chars = response.len(), "Selection response received");

        let urls = parse_url_selection(&response)?;

        if urls.len() != TOP_ARTICLE_COUNT {
            warn!(
                returned = urls.len(),
                expected = TOP_ARTICLE_COUNT,
                "Selector returned unexpected URL count, proceeding"
            );
        }

        info!(count = urls.len(), "Articles selected");
        Ok(urls)
    }
}
