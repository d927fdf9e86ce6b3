use crate::{Result, error::Error};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const EXPECTED_SHAPE: &str = "expected JSON body { video: { data: base64, mimeType }, promptText }";

/// Base64-encoded video bytes plus their media type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoPayload {
    pub data: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    pub video: VideoPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PromptResponse {
    pub prompt: String,
}

impl PromptRequest {
    /// Parses and validates a request body. Validation is manual rather
    /// than serde-derived so that every shape violation maps to the same
    /// 400 response instead of a deserializer rejection.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(body).map_err(|_| Error::bad_request(EXPECTED_SHAPE))?;

        let object = value
            .as_object()
            .ok_or_else(|| Error::bad_request(EXPECTED_SHAPE))?;

        let video = object
            .get("video")
            .and_then(Value::as_object)
            .ok_or_else(|| Error::bad_request(EXPECTED_SHAPE))?;

        let data = video
            .get("data")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::bad_request(EXPECTED_SHAPE))?;

        let mime_type = video
            .get("mimeType")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::bad_request(EXPECTED_SHAPE))?;

        let prompt_text = match object.get("promptText") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => return Err(Error::bad_request(EXPECTED_SHAPE)),
        };

        Ok(Self {
            video: VideoPayload {
                data: data.to_string(),
                mime_type: mime_type.to_string(),
            },
            prompt_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse_json(value: Value) -> Result<PromptRequest> {
        PromptRequest::parse(value.to_string().as_bytes())
    }

    #[test]
    fn test_parse_full_request() {
        let request = parse_json(json!({
            "video": { "data": "AAAA", "mimeType": "video/mp4" },
            "promptText": "Describe the scene"
        }))
        .unwrap();

        assert_eq!(request.video.data, "AAAA");
        assert_eq!(request.video.mime_type, "video/mp4");
        assert_eq!(request.prompt_text.as_deref(), Some("Describe the scene"));
    }

    #[test]
    fn test_parse_without_prompt_text() {
        let request = parse_json(json!({
            "video": { "data": "AAAA", "mimeType": "video/webm" }
        }))
        .unwrap();

        assert_eq!(request.prompt_text, None);
    }

    #[test]
    fn test_parse_null_prompt_text() {
        let request = parse_json(json!({
            "video": { "data": "AAAA", "mimeType": "video/mp4" },
            "promptText": null
        }))
        .unwrap();

        assert_eq!(request.prompt_text, None);
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let result = PromptRequest::parse(b"not json");

        assert!(matches!(result, Err(Error::BadRequest(_))));
    }

    #[test]
    fn test_parse_rejects_missing_video() {
        let result = parse_json(json!({ "promptText": "hi" }));

        assert!(matches!(result, Err(Error::BadRequest(_))));
    }

    #[test]
    fn test_parse_rejects_empty_video_object() {
        let result = parse_json(json!({ "video": {} }));

        assert!(matches!(result, Err(Error::BadRequest(_))));
    }

    #[test]
    fn test_parse_rejects_numeric_data_field() {
        let result = parse_json(json!({
            "video": { "data": 42, "mimeType": "video/mp4" }
        }));

        assert!(matches!(result, Err(Error::BadRequest(_))));
    }

    #[test]
    fn test_parse_rejects_non_string_prompt_text() {
        let result = parse_json(json!({
            "video": { "data": "AAAA", "mimeType": "video/mp4" },
            "promptText": ["not", "a", "string"]
        }));

        assert!(matches!(result, Err(Error::BadRequest(_))));
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let request = PromptRequest {
            video: VideoPayload {
                data: "AAAA".to_string(),
                mime_type: "video/mp4".to_string(),
            },
            prompt_text: None,
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["video"]["mimeType"], json!("video/mp4"));
        assert!(value.get("promptText").is_none());
    }
}
