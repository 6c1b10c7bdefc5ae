//! Core PostComposer implementation

use crate::error::ComposeError;
use crate::prompt::ComposePrompt;
use postwright_domain::traits::LlmProvider;
use postwright_domain::{ChunkSummary, CompletionRequest, Post, Query};
use std::sync::Arc;
use tracing::{debug, info};

/// Sampling temperature for the composition call
///
/// Higher than selection and summarization: the final post benefits from
/// a livelier register.
pub const COMPOSE_TEMPERATURE: f32 = 0.7;

/// Synthesizes the final post from all chunk summaries
pub struct PostComposer<L> {
    llm: Arc<L>,
}

impl<L> PostComposer<L>
where
    L: LlmProvider + Send + Sync,
{
    /// Create a composer over the given LLM provider
    pub fn new(llm: Arc<L>) -> Self {
        Self { llm }
    }

    /// Compose the final post
    pub async fn compose(
        &self,
        summaries: &[ChunkSummary],
        query: &Query,
    ) -> Result<Post, ComposeError> {
        let prompt = ComposePrompt::new(summaries, query).build();
        debug!(
            prompt_chars = prompt.len(),
            summaries = summaries.len(),
            "Composition prompt built"
        );

        let text = self
            .llm
            .complete(CompletionRequest::new(prompt, COMPOSE_TEMPERATURE))
            .await
            .map_err(|e| ComposeError::Llm(e.to_string()))?;

        let post = Post::new(text);
        info!(
            chars = post.text().len(),
            hashtags = post.hashtag_count(),
            "Post composed"
        );
        Ok(post)
    }
}
