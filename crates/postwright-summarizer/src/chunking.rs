//! Line-oriented text chunking with bounded overlap

use crate::config::SummarizerConfig;
use postwright_domain::Chunk;

/// Splits document text into bounded-size chunks
///
/// Splits prefer newline boundaries; only a line longer than the chunk
/// budget is hard-cut at a char boundary. Each chunk after the first
/// starts with the previous chunk's tail, and the actual tail length is
/// recorded on the chunk, so concatenating [`Chunk::new_content`] across
/// the sequence reconstructs the input exactly.
pub struct TextChunker {
    max_chunk_chars: usize,
    overlap_chars: usize,
}

impl TextChunker {
    /// Create a chunker from a validated configuration
    pub fn new(config: &SummarizerConfig) -> Self {
        Self {
            max_chunk_chars: config.max_chunk_chars,
            overlap_chars: config.chunk_overlap_chars,
        }
    }

    /// Chunk the given text
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        if text.is_empty() {
            return Vec::new();
        }
        if text.len() <= self.max_chunk_chars {
            return vec![Chunk {
                text: text.to_string(),
                index: 0,
                overlap: 0,
            }];
        }

        // The line budget reserves room for the overlap tail, so a tail
        // plus any single segment always fits one chunk
        let budget = self.max_chunk_chars - self.overlap_chars;

        let mut segments: Vec<&str> = Vec::new();
        for line in text.split_inclusive('\n') {
            if line.len() <= budget {
                segments.push(line);
            } else {
                segments.extend(split_at_char_limit(line, budget));
            }
        }

        let mut chunks: Vec<Chunk> = Vec::new();
        let mut current = String::new();
        let mut current_overlap = 0;

        for segment in segments {
            if !current.is_empty() && current.len() + segment.len() > self.max_chunk_chars {
                let tail = self.overlap_tail(&current);
                chunks.push(Chunk {
                    text: std::mem::take(&mut current),
                    index: chunks.len(),
                    overlap: current_overlap,
                });
                current_overlap = tail.len();
                current = tail;
            }
            current.push_str(segment);
        }

        if current.len() > current_overlap {
            chunks.push(Chunk {
                text: current,
                index: chunks.len(),
                overlap: current_overlap,
            });
        }

        chunks
    }

    /// The tail of a finished chunk carried into the next one
    ///
    /// Starts at a line boundary when one falls within the overlap
    /// budget, otherwise at the nearest char boundary.
    fn overlap_tail(&self, chunk: &str) -> String {
        if self.overlap_chars == 0 {
            return String::new();
        }

        let limit = chunk.len().saturating_sub(self.overlap_chars);
        if limit == 0 {
            return chunk.to_string();
        }

        let bytes = chunk.as_bytes();
        for i in (limit - 1)..(chunk.len() - 1) {
            if bytes[i] == b'\n' {
                return chunk[i + 1..].to_string();
            }
        }

        let mut start = limit;
        while !chunk.is_char_boundary(start) {
            start += 1;
        }
        chunk[start..].to_string()
    }
}

/// Split text into pieces of at most `limit` bytes at char boundaries
fn split_at_char_limit(text: &str, limit: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let mut end = (start + limit).min(text.len());
        while end > start && !text.is_char_boundary(end) {
            end -= 1;
        }
        if end == start {
            // A single char wider than the limit; take it whole
            end = (start + 1..=text.len())
                .find(|&i| text.is_char_boundary(i))
                .unwrap_or(text.len());
        }
        pieces.push(&text[start..end]);
        start = end;
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunker(max: usize, overlap: usize) -> TextChunker {
        TextChunker::new(&SummarizerConfig {
            max_chunk_chars: max,
            chunk_overlap_chars: overlap,
        })
    }

    fn reconstruct(chunks: &[Chunk]) -> String {
        chunks.iter().map(|c| c.new_content()).collect()
    }

    #[test]
    fn test_small_text_is_one_chunk() {
        let chunks = chunker(100, 10).chunk("Short text here.");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "Short text here.");
        assert_eq!(chunks[0].overlap, 0);
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(chunker(100, 10).chunk("").is_empty());
    }

    #[test]
    fn test_chunking_is_deterministic() {
        let text = "line one\nline two\nline three\nline four\nline five\n".repeat(20);
        let a = chunker(120, 20).chunk(&text);
        let b = chunker(120, 20).chunk(&text);
        assert_eq!(a, b);
    }

    #[test]
    fn test_chunks_reconstruct_original_text() {
        let text = "alpha line\nbeta line\ngamma line\ndelta line\nepsilon line\n".repeat(10);
        let chunks = chunker(80, 15).chunk(&text);
        assert!(chunks.len() > 1);
        assert_eq!(reconstruct(&chunks), text);
    }

    #[test]
    fn test_chunks_never_exceed_max() {
        let text = "some words on a line\n".repeat(50);
        for chunk in chunker(100, 20).chunk(&text) {
            assert!(chunk.text.len() <= 100, "chunk of {} chars", chunk.text.len());
        }
    }

    #[test]
    fn test_overlap_is_previous_chunk_tail() {
        let text = "one\ntwo\nthree\nfour\nfive\nsix\nseven\neight\n".repeat(5);
        let chunks = chunker(60, 12).chunk(&text);
        assert!(chunks.len() > 1);
        for pair in chunks.windows(2) {
            let prev = &pair[0].text;
            let next = &pair[1];
            assert!(next.overlap > 0);
            assert!(next.overlap <= 12);
            assert_eq!(&next.text[..next.overlap], &prev[prev.len() - next.overlap..]);
        }
    }

    #[test]
    fn test_overlap_prefers_line_boundaries() {
        let text = "aaaa\nbbbb\ncccc\ndddd\neeee\nffff\ngggg\nhhhh\n";
        let chunks = chunker(20, 8).chunk(text);
        assert!(chunks.len() > 1);
        for chunk in &chunks[1..] {
            // Tail starts at a line start, so the overlap region is whole lines
            assert!(chunk.text[..chunk.overlap].ends_with('\n'));
        }
        assert_eq!(reconstruct(&chunks), text);
    }

    #[test]
    fn test_long_single_line_hard_cut() {
        let text = "a".repeat(250);
        let chunks = chunker(100, 10).chunk(&text);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.text.len() <= 100);
        }
        assert_eq!(reconstruct(&chunks), text);
    }

    #[test]
    fn test_zero_overlap() {
        let text = "first line\nsecond line\nthird line\nfourth line\n".repeat(5);
        let chunks = chunker(60, 0).chunk(&text);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert_eq!(chunk.overlap, 0);
        }
        assert_eq!(reconstruct(&chunks), text);
    }

    #[test]
    fn test_indices_are_sequential() {
        let text = "line\n".repeat(100);
        let chunks = chunker(50, 10).chunk(&text);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
        }
    }

    #[test]
    fn test_multibyte_text_cuts_on_char_boundaries() {
        let text = "héllo wörld çafé ünïcode\n".repeat(30);
        let chunks = chunker(64, 16).chunk(&text);
        // Slicing would have panicked on a bad boundary; verify content too
        assert_eq!(reconstruct(&chunks), text);
    }

    #[test]
    fn test_split_at_char_limit_partitions() {
        let pieces = split_at_char_limit("abcdefghij", 4);
        assert_eq!(pieces, vec!["abcd", "efgh", "ij"]);
    }
}
