//! Locates and parses a JSON payload embedded in free oracle text.

use serde_json::Value;
use thiserror::Error;

/// Failure modes of [`extract_json`]. Both map to the parsing
/// classification upstream, with distinct diagnostics.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The text contained no structured payload at all (no opening bracket,
    /// or the last closing bracket precedes the first opening one).
    #[error("response did not contain a structured payload")]
    NoStructuredData,

    /// A candidate slice was found but is not valid JSON.
    #[error("structured payload was found but is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Extracts the JSON value embedded in `text`.
///
/// Model output is frequently wrapped in prose or fenced code blocks, so the
/// boundaries are found by bracket matching rather than fence syntax: the
/// earliest `{` or `[` opens the slice and the latest `}` or `]` closes it,
/// inclusive.
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    let start = earliest(text.find('{'), text.find('['));
    let end = latest(text.rfind('}'), text.rfind(']'));

    match (start, end) {
        (Some(start), Some(end)) if start <= end => {
            Ok(serde_json::from_str(&text[start..=end])?)
        }
        _ => Err(ExtractError::NoStructuredData),
    }
}

fn earliest(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (index, None) | (None, index) => index,
    }
}

fn latest(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (index, None) | (None, index) => index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_object_wrapped_in_prose() {
        let text = "Sure! Here is the component you asked for:\n\
                    {\"partNumber\": \"LM317T\", \"price\": \"$0.52\"}\n\
                    Let me know if you need anything else.";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!({"partNumber": "LM317T", "price": "$0.52"}));
    }

    #[test]
    fn test_extracts_array_from_fenced_block() {
        let text = "```json\n[{\"partNumber\": \"LM350T\"}]\n```";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!([{"partNumber": "LM350T"}]));
    }

    #[test]
    fn test_no_brackets_fails_as_no_data() {
        let result = extract_json("I could not find any matching component.");
        assert!(matches!(result, Err(ExtractError::NoStructuredData)));
    }

    #[test]
    fn test_end_before_start_fails_as_no_data() {
        // A `{` after a `]` with nothing valid between them.
        let result = extract_json("] stray bracket, then {");
        assert!(matches!(result, Err(ExtractError::NoStructuredData)));
    }

    #[test]
    fn test_invalid_slice_fails_as_invalid_json() {
        let result = extract_json("data: {partNumber: unquoted}");
        assert!(matches!(result, Err(ExtractError::InvalidJson(_))));
    }

    #[test]
    fn test_mixed_bracket_kinds_pick_outermost() {
        let text = "prefix [ {\"a\": 1}, {\"b\": [2, 3]} ] suffix";
        let value = extract_json(text).unwrap();
        assert_eq!(value, json!([{"a": 1}, {"b": [2, 3]}]));
    }

    #[test]
    fn test_opening_bracket_without_close_fails() {
        let result = extract_json("here it comes: {\"partNumber\": ");
        assert!(matches!(result, Err(ExtractError::NoStructuredData)));
    }
}
