//! Chunks and chunk summaries
//!
//! A chunk is a bounded-size contiguous slice of one document's text,
//! the unit a single summarization prompt operates on. Neighboring
//! chunks share a bounded overlap so no context is lost at the seam.

use url::Url;

/// One bounded-size slice of a document's text
///
/// `overlap` is the byte length of this chunk's prefix that repeats the
/// tail of the previous chunk of the same document (0 for the first
/// chunk). Because the actual overlap is recorded per chunk, the source
/// text can be reconstructed exactly by concatenating
/// [`Chunk::new_content`] across the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk text, overlap prefix included
    pub text: String,

    /// Position of this chunk within its document, starting at 0
    pub index: usize,

    /// Byte length of the prefix shared with the previous chunk
    pub overlap: usize,
}

impl Chunk {
    /// The part of this chunk not already covered by the previous chunk
    pub fn new_content(&self) -> &str {
        &self.text[self.overlap..]
    }
}

/// LLM-generated summary of exactly one chunk
///
/// Collected per run in chunk-processing order: document order first,
/// chunk order within each document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSummary {
    /// The summary text
    pub text: String,

    /// Index of the summarized chunk within its document
    pub chunk_index: usize,

    /// URL of the document the chunk came from
    pub source_url: Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_content_skips_overlap() {
        let chunk = Chunk {
            text: "tail of previous\nfresh line\n".to_string(),
            index: 1,
            overlap: "tail of previous\n".len(),
        };
        assert_eq!(chunk.new_content(), "fresh line\n");
    }

    #[test]
    fn test_first_chunk_has_no_overlap() {
        let chunk = Chunk {
            text: "opening text".to_string(),
            index: 0,
            overlap: 0,
        };
        assert_eq!(chunk.new_content(), "opening text");
    }
}
