//! OpenAI chat completions wire format

use serde::Serialize;
use serde_json::Value;

/// One chat message
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

/// Request body for `POST {api_base}/chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionBody<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 2],
    pub temperature: f32,
    pub max_tokens: u32,
}

impl<'a> ChatCompletionBody<'a> {
    pub fn new(
        model: &'a str,
        system: &'a str,
        prompt: &'a str,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature,
            max_tokens,
        }
    }
}

/// `choices[0].message.content`, or an empty string when any part is missing
pub fn message_content(payload: &Value) -> String {
    payload
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Error text for a non-200 response: compact JSON when the body parses,
/// the raw text otherwise.
pub fn error_body(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => value.to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_serialization() {
        let body = ChatCompletionBody::new("m", "sys", "hi", 0.0, 2048);
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(
            value,
            json!({
                "model": "m",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ],
                "temperature": 0.0,
                "max_tokens": 2048
            })
        );
    }

    #[test]
    fn test_message_content() {
        let payload = json!({"choices": [{"message": {"role": "assistant", "content": "42"}}]});
        assert_eq!(message_content(&payload), "42");
    }

    #[test]
    fn test_message_content_missing_parts() {
        assert_eq!(message_content(&json!({})), "");
        assert_eq!(message_content(&json!({"choices": []})), "");
        assert_eq!(message_content(&json!({"choices": [{"message": {"content": null}}]})), "");
    }

    #[test]
    fn test_error_body() {
        assert_eq!(error_body("{ \"error\": \"bad\" }"), r#"{"error":"bad"}"#);
        assert_eq!(error_body("Bad Gateway"), "Bad Gateway");
    }
}
