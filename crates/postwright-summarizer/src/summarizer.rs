//! Core ChunkedSummarizer implementation

use crate::chunking::TextChunker;
use crate::config::SummarizerConfig;
use crate::error::SummarizeError;
use crate::prompt::SummaryPrompt;
use postwright_domain::traits::LlmProvider;
use postwright_domain::{ChunkSummary, CompletionRequest, Document, Query};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Sampling temperature for chunk summary calls
pub const SUMMARY_TEMPERATURE: f32 = 0.4;

/// Summarizes documents chunk by chunk
///
/// Chunks are processed sequentially in document order, chunk order
/// within a document; no chunk's summary depends on another's, and the
/// output sequence preserves processing order.
pub struct ChunkedSummarizer<L> {
    llm: Arc<L>,
    config: SummarizerConfig,
}

impl<L> ChunkedSummarizer<L>
where
    L: LlmProvider + Send + Sync,
{
    /// Create a summarizer over the given LLM provider
    pub fn new(llm: Arc<L>, config: SummarizerConfig) -> Self {
        Self { llm, config }
    }

    /// Summarize every chunk of every document
    ///
    /// A failed chunk is logged and skipped; the stage fails only when
    /// no chunk could be summarized at all.
    pub async fn summarize(
        &self,
        documents: &[Document],
        query: &Query,
    ) -> Result<Vec<ChunkSummary>, SummarizeError> {
        let chunker = TextChunker::new(&self.config);

        let mut summaries = Vec::new();
        let mut attempted = 0;

        for document in documents {
            if document.text.is_empty() {
                debug!(url = %document.url, "Skipping empty document");
                continue;
            }

            let chunks = chunker.chunk(&document.text);
            info!(url = %document.url, chunks = chunks.len(), "Summarizing document");

            for chunk in chunks {
                attempted += 1;

                let prompt = SummaryPrompt::new(&chunk.text, query).build();
                let request = CompletionRequest::new(prompt, SUMMARY_TEMPERATURE);

                match self.llm.complete(request).await {
                    Ok(text) => summaries.push(ChunkSummary {
                        text,
                        chunk_index: chunk.index,
                        source_url: document.url.clone(),
                    }),
                    Err(e) => {
                        warn!(
                            url = %document.url,
                            chunk = chunk.index,
                            error = %e,
                            "Chunk summarization failed, skipping"
                        );
                    }
                }
            }
        }

        if attempted == 0 {
            return Err(SummarizeError::NoContent);
        }
        if summaries.is_empty() {
            return Err(SummarizeError::AllChunksFailed { attempted });
        }

        info!(
            summaries = summaries.len(),
            skipped = attempted - summaries.len(),
            "Summarization complete"
        );
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postwright_llm::MockLlm;
    use url::Url;

    fn doc(url: &str, text: &str) -> Document {
        Document::fetched(Url::parse(url).unwrap(), text.to_string())
    }

    fn failed_doc(url: &str) -> Document {
        Document::failed(Url::parse(url).unwrap(), "HTTP 503")
    }

    fn config(max: usize, overlap: usize) -> SummarizerConfig {
        SummarizerConfig {
            max_chunk_chars: max,
            chunk_overlap_chars: overlap,
        }
    }

    #[tokio::test]
    async fn test_one_summary_per_chunk() {
        let llm = MockLlm::new("a summary");
        let summarizer = ChunkedSummarizer::new(Arc::new(llm.clone()), config(40, 5));

        let text = "first line of text\nsecond line of text\nthird line of text\n";
        let documents = vec![doc("https://example.com/a", text)];

        let summaries = summarizer
            .summarize(&documents, &Query::new("topic"))
            .await
            .unwrap();

        assert!(summaries.len() > 1);
        assert_eq!(summaries.len(), llm.call_count());
    }

    #[tokio::test]
    async fn test_summaries_preserve_document_and_chunk_order() {
        let mut llm = MockLlm::default();
        llm.respond_when("doc one body", "summary one");
        llm.respond_when("doc two body", "summary two");

        let summarizer = ChunkedSummarizer::new(Arc::new(llm), config(1000, 50));
        let documents = vec![
            doc("https://example.com/1", "doc one body"),
            doc("https://example.com/2", "doc two body"),
        ];

        let summaries = summarizer
            .summarize(&documents, &Query::new("topic"))
            .await
            .unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].text, "summary one");
        assert_eq!(summaries[0].source_url.as_str(), "https://example.com/1");
        assert_eq!(summaries[1].text, "summary two");
        assert_eq!(summaries[1].source_url.as_str(), "https://example.com/2");
    }

    #[tokio::test]
    async fn test_failed_documents_are_skipped() {
        let llm = MockLlm::new("a summary");
        let summarizer = ChunkedSummarizer::new(Arc::new(llm), config(1000, 50));

        let documents = vec![
            doc("https://example.com/ok", "usable body text"),
            failed_doc("https://example.com/broken"),
        ];

        let summaries = summarizer
            .summarize(&documents, &Query::new("topic"))
            .await
            .unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].source_url.as_str(), "https://example.com/ok");
    }

    #[tokio::test]
    async fn test_failed_chunk_is_skipped_not_fatal() {
        let mut llm = MockLlm::new("a summary");
        llm.fail_when("poisoned chunk body");

        let summarizer = ChunkedSummarizer::new(Arc::new(llm), config(1000, 50));
        let documents = vec![
            doc("https://example.com/1", "healthy chunk body"),
            doc("https://example.com/2", "poisoned chunk body"),
            doc("https://example.com/3", "another healthy body"),
        ];

        let summaries = summarizer
            .summarize(&documents, &Query::new("topic"))
            .await
            .unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].source_url.as_str(), "https://example.com/1");
        assert_eq!(summaries[1].source_url.as_str(), "https://example.com/3");
    }

    #[tokio::test]
    async fn test_all_chunks_failing_is_stage_failure() {
        let mut llm = MockLlm::default();
        llm.fail_when("summarising");

        let summarizer = ChunkedSummarizer::new(Arc::new(llm), config(1000, 50));
        let documents = vec![doc("https://example.com/a", "some body")];

        let result = summarizer.summarize(&documents, &Query::new("topic")).await;
        assert!(matches!(
            result,
            Err(SummarizeError::AllChunksFailed { attempted: 1 })
        ));
    }

    #[tokio::test]
    async fn test_no_usable_documents_is_no_content() {
        let llm = MockLlm::default();
        let summarizer = ChunkedSummarizer::new(Arc::new(llm), config(1000, 50));

        let documents = vec![
            failed_doc("https://example.com/x"),
            failed_doc("https://example.com/y"),
        ];

        let result = summarizer.summarize(&documents, &Query::new("topic")).await;
        assert!(matches!(result, Err(SummarizeError::NoContent)));
    }
}
