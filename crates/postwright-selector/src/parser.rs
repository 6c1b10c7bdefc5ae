//! Parse LLM output into a URL list

use crate::error::SelectionError;
use serde_json::Value;
use tracing::warn;
use url::Url;

/// Parse the model's raw text into a list of absolute http(s) URLs
///
/// Entries that are not strings, not parseable URLs, or not http(s) are
/// logged and dropped. Zero surviving URLs is a stage failure; any other
/// count is the caller's policy decision.
pub fn parse_url_selection(response: &str) -> Result<Vec<Url>, SelectionError> {
    // LLMs sometimes wrap JSON in markdown code blocks
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| SelectionError::Malformed(format!("JSON parse error: {}", e)))?;

    let entries = json
        .as_array()
        .ok_or_else(|| SelectionError::Malformed("Expected JSON array".to_string()))?;

    let mut urls = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let Some(link) = entry.as_str() else {
            warn!("Selection entry {} is not a string", idx);
            continue;
        };
        match Url::parse(link.trim()) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => urls.push(url),
            Ok(url) => warn!(scheme = url.scheme(), "Selection entry {} is not http(s)", idx),
            Err(e) => warn!("Selection entry {} is not a valid URL: {}", idx, e),
        }
    }

    if urls.is_empty() {
        return Err(SelectionError::Malformed(
            "No usable URLs in selection".to_string(),
        ));
    }

    Ok(urls)
}

/// Extract JSON from a response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, SelectionError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(SelectionError::Malformed("Empty code block".to_string()));
        }

        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}
