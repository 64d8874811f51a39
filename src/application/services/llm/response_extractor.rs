//! JSON recovery from free-form LLM output
//!
//! Models are instructed to respond with JSON only, but frequently wrap the
//! payload in explanatory prose anyway. Rather than re-querying, extraction
//! runs in two stages: parse the whole response, then fall back to the
//! outermost bracket-delimited slice (first `[` through last `]`, or `{`
//! through `}`).

use serde_json::{Map, Value};

/// Placeholder substituted for non-string elements in tweet arrays
pub const UNREADABLE_SEGMENT: &str = "[unreadable tweet]";

/// Extraction failures, by stage
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The response contains no candidate JSON at all
    #[error("no valid JSON found in response")]
    NoJsonFound,
    /// A candidate slice was found but does not parse
    #[error("failed to parse extracted JSON")]
    InvalidJson(#[source] serde_json::Error),
}

/// Extract a JSON array from raw model output
pub fn extract_array(text: &str) -> Result<Vec<Value>, ExtractError> {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text) {
        return Ok(items);
    }

    let slice = delimited_slice(text, '[', ']').ok_or(ExtractError::NoJsonFound)?;
    match serde_json::from_str::<Value>(slice) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(_) => Err(ExtractError::NoJsonFound),
        Err(e) => Err(ExtractError::InvalidJson(e)),
    }
}

/// Extract a JSON object from raw model output
pub fn extract_object(text: &str) -> Result<Map<String, Value>, ExtractError> {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) {
        return Ok(map);
    }

    let slice = delimited_slice(text, '{', '}').ok_or(ExtractError::NoJsonFound)?;
    match serde_json::from_str::<Value>(slice) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ExtractError::NoJsonFound),
        Err(e) => Err(ExtractError::InvalidJson(e)),
    }
}

/// Map extracted array elements to strings.
///
/// Non-string elements become a placeholder instead of failing the whole
/// operation.
pub fn string_items(values: Vec<Value>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| match v {
            Value::String(s) => s,
            _ => UNREADABLE_SEGMENT.to_string(),
        })
        .collect()
}

/// Greedy slice from the first opening delimiter through the last closing one
fn delimited_slice(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_array_parse() {
        let values = extract_array(r#"["Tweet one", "Tweet two"]"#).unwrap();
        assert_eq!(values, vec![json!("Tweet one"), json!("Tweet two")]);
    }

    #[test]
    fn test_array_wrapped_in_prose() {
        let text = r#"Here is your thread: ["Tweet one", "Tweet two"]"#;
        let values = extract_array(text).unwrap();
        assert_eq!(values, vec![json!("Tweet one"), json!("Tweet two")]);
    }

    #[test]
    fn test_object_wrapped_in_prose() {
        let text = r#"Sure! {"title": "My Post", "content": "Body"} Hope that helps."#;
        let map = extract_object(text).unwrap();
        assert_eq!(map.get("title"), Some(&json!("My Post")));
    }

    #[test]
    fn test_no_json_at_all() {
        let err = extract_array("I cannot comply").unwrap_err();
        assert!(matches!(err, ExtractError::NoJsonFound));

        let err = extract_object("I cannot comply").unwrap_err();
        assert!(matches!(err, ExtractError::NoJsonFound));
    }

    #[test]
    fn test_malformed_slice() {
        let err = extract_array(r#"thread: ["one", "two"#).unwrap_err();
        assert!(matches!(err, ExtractError::NoJsonFound));

        let err = extract_array(r#"["one" "two"]"#).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidJson(_)));
    }

    #[test]
    fn test_greedy_slice_spans_nested_brackets() {
        // First [ through last ] captures the outermost array
        let text = r#"Options: [["a"], ["b"]] done"#;
        let values = extract_array(text).unwrap();
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_round_trip() {
        let original = json!({"analysis": {"hookType": "story"}, "remixedThread": ["a", "b"]});
        let map = extract_object(&original.to_string()).unwrap();
        assert_eq!(Value::Object(map), original);
    }

    #[test]
    fn test_string_items_replaces_non_strings() {
        let items = string_items(vec![json!("fine"), json!(42), json!(null)]);
        assert_eq!(items[0], "fine");
        assert_eq!(items[1], UNREADABLE_SEGMENT);
        assert_eq!(items[2], UNREADABLE_SEGMENT);
    }
}
