//! Documents - extracted page text, one per selected URL

use url::Url;

/// Plain text extracted from one web page
///
/// A failed fetch or parse does not abort the batch it belongs to; the
/// failure is recorded here and the text left empty, so the document
/// sequence always has one entry per input URL, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Source URL the text was extracted from
    pub url: Url,

    /// Extracted plain text; empty when extraction failed
    pub text: String,

    /// Failure reason, when the fetch or parse for this URL failed
    pub failure: Option<String>,
}

impl Document {
    /// A successfully extracted document
    pub fn fetched(url: Url, text: String) -> Self {
        Self {
            url,
            text,
            failure: None,
        }
    }

    /// A document whose fetch or parse failed
    pub fn failed(url: Url, reason: impl Into<String>) -> Self {
        Self {
            url,
            text: String::new(),
            failure: Some(reason.into()),
        }
    }

    /// Whether extraction failed for this URL
    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }
}
