use serde::Serialize;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Body accepted by a Slack incoming webhook.
#[derive(Debug, Serialize)]
pub struct SlackPayload<'a> {
    pub text: &'a str,
}

impl<'a> SlackPayload<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// UTF-8 JSON bytes ready to POST.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn only_text_field_is_emitted() {
        let bytes = SlackPayload::new("deploy finished").to_json().unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, json!({"text": "deploy finished"}));
    }

    #[test]
    fn special_characters_survive_serialization() {
        let samples = [
            r#"she said "ship it""#,
            r"C:\deploy\logs",
            "line one\nline two\ttabbed",
            "héllo wörld ✅ 🚨 日本語",
            "\u{0007} bell and </script>",
        ];
        for text in samples {
            let bytes = SlackPayload::new(text).to_json().unwrap();
            let value: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(value, json!({ "text": text }), "payload for {text:?}");
        }
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        let bytes = SlackPayload::new(r#"a"b\c"#).to_json().unwrap();
        assert_eq!(bytes, br#"{"text":"a\"b\\c"}"#);
    }
}
