//! Extraction helpers over the `generateContent` response envelope.
//!
//! Only the first candidate is consumed. Both helpers are tolerant of missing
//! or oddly shaped fields: a part without `text` contributes nothing, and an
//! absent `candidates` array yields an empty result rather than an error.

use crate::types::GeneratedImage;
use serde_json::Value;

fn first_candidate_parts(body: &Value) -> Option<&Vec<Value>> {
    body.pointer("/candidates/0/content/parts")?.as_array()
}

/// Concatenate the `text` fields of the first candidate's parts, in order.
pub fn extract_text(body: &Value) -> String {
    let Some(parts) = first_candidate_parts(body) else {
        return String::new();
    };

    parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect()
}

/// Text concatenation plus a data URI for the first inline image part found.
///
/// Later inline image parts are ignored.
pub fn extract_image(body: &Value) -> GeneratedImage {
    let mut result = GeneratedImage {
        text: String::new(),
        image_url: None,
    };

    let Some(parts) = first_candidate_parts(body) else {
        return result;
    };

    for part in parts {
        if let Some(text) = part.get("text").and_then(Value::as_str) {
            result.text.push_str(text);
        }
        if result.image_url.is_none() {
            if let Some(data) = part.pointer("/inlineData/data").and_then(Value::as_str) {
                if !data.is_empty() {
                    result.image_url = Some(format!("data:image/png;base64,{}", data));
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_text_concatenates_parts_in_order() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "a" }, { "text": "b" }] }
            }]
        });
        assert_eq!(extract_text(&body), "ab");
    }

    #[test]
    fn test_extract_text_skips_parts_without_text() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "a" },
                        { "inlineData": { "mimeType": "image/png", "data": "QQ==" } },
                        { "text": "b" }
                    ]
                }
            }]
        });
        assert_eq!(extract_text(&body), "ab");
    }

    #[test]
    fn test_extract_text_empty_when_no_candidates() {
        assert_eq!(extract_text(&json!({})), "");
        assert_eq!(extract_text(&json!({"candidates": []})), "");
    }

    #[test]
    fn test_extract_text_empty_when_parts_missing() {
        let body = json!({ "candidates": [{ "content": {} }] });
        assert_eq!(extract_text(&body), "");
    }

    #[test]
    fn test_extract_image_builds_data_uri_from_first_inline_part() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "here you go" },
                        { "inlineData": { "mimeType": "image/png", "data": "XYZ" } },
                        { "inlineData": { "mimeType": "image/png", "data": "LATER" } }
                    ]
                }
            }]
        });

        let result = extract_image(&body);
        assert_eq!(result.text, "here you go");
        assert_eq!(
            result.image_url.as_deref(),
            Some("data:image/png;base64,XYZ")
        );
    }

    #[test]
    fn test_extract_image_ignores_empty_inline_data() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "inlineData": { "mimeType": "image/png", "data": "" } },
                        { "inlineData": { "mimeType": "image/png", "data": "REAL" } }
                    ]
                }
            }]
        });

        let result = extract_image(&body);
        assert_eq!(
            result.image_url.as_deref(),
            Some("data:image/png;base64,REAL")
        );
    }

    #[test]
    fn test_extract_image_empty_when_no_candidates() {
        let result = extract_image(&json!({}));
        assert_eq!(result.text, "");
        assert_eq!(result.image_url, None);
    }
}
