//! HTML to plain text reduction

use scraper::{ElementRef, Html, Selector};

// Content containers tried in priority order before falling back to <body>.
const CONTENT_SELECTORS: [&str; 8] = [
    "article",
    "main",
    "[role='main']",
    ".post-content",
    ".article-content",
    ".entry-content",
    ".content-body",
    "#content",
];

const MIN_CONTENT_CHARS: usize = 200;

/// Reduce an HTML page to plain text
///
/// Block elements (paragraphs, headings, list items) become one line
/// each, so downstream chunking can split at line boundaries. Content
/// containers are preferred over the raw body; scripts, navigation and
/// styling never contribute text because only block-level content
/// elements are read.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    for selector_str in CONTENT_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text = block_text(&element);
                if text.len() > MIN_CONTENT_CHARS {
                    return text;
                }
            }
        }
    }

    // Fallback: whole body
    if let Ok(selector) = Selector::parse("body") {
        if let Some(body) = document.select(&selector).next() {
            return block_text(&body);
        }
    }

    String::new()
}

/// Collect block-level text under an element, one line per block
fn block_text(element: &ElementRef) -> String {
    let blocks = match Selector::parse("p, h1, h2, h3, h4, h5, h6, li, blockquote") {
        Ok(selector) => selector,
        Err(_) => return collapse_whitespace(&element.text().collect::<Vec<_>>().join(" ")),
    };

    let lines: Vec<String> = element
        .select(&blocks)
        .map(|block| collapse_whitespace(&block.text().collect::<Vec<_>>().join(" ")))
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        // No block markup; take the element's own text as a single line
        collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "))
    } else {
        lines.join("\n")
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML_ARTICLE: &str = r#"
        <!DOCTYPE html>
        <html>
        <head><title>Test</title><script>var tracked = true;</script></head>
        <body>
            <nav>Navigation links here that should not appear in extracted content</nav>
            <article>
                <h1>Main Article Title</h1>
                <p>This is the main content of the article with important information that
                readers need to know about. The article contains detailed explanations and
                substantial text that provides value to the reader.</p>
                <p>More substantial content that should be extracted as part of the main
                article body. This paragraph adds additional context for the overall piece.</p>
            </article>
            <footer>Footer content that should not be included</footer>
        </body>
        </html>
    "#;

    #[test]
    fn test_extracts_article_content() {
        let text = html_to_text(SAMPLE_HTML_ARTICLE);
        assert!(text.contains("Main Article Title"));
        assert!(text.contains("main content"));
        assert!(!text.contains("Navigation"));
        assert!(!text.contains("Footer"));
        assert!(!text.contains("tracked"));
    }

    #[test]
    fn test_blocks_become_lines() {
        let text = html_to_text(SAMPLE_HTML_ARTICLE);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Main Article Title");
    }

    #[test]
    fn test_body_fallback_without_containers() {
        let html = "<html><body><p>Short body only.</p></body></html>";
        let text = html_to_text(html);
        assert_eq!(text, "Short body only.");
    }

    #[test]
    fn test_whitespace_collapsed_within_blocks() {
        let html = "<html><body><article><p>Spaced   out\n\n   text</p></article></body></html>";
        let text = html_to_text(html);
        assert!(text.contains("Spaced out text"));
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(html_to_text("<html><body></body></html>"), "");
    }
}
