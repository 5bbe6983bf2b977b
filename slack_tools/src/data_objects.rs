use serde::{Deserialize, Serialize};

use crate::SlackApiError;

/// Every Slack Web API reply is an HTTP 200 carrying `ok`; failures are reported in `error`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackEnvelope<T> {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

impl<T> SlackEnvelope<T> {
    pub fn into_result(self) -> Result<T, SlackApiError> {
        if self.ok {
            Ok(self.data)
        } else {
            Err(SlackApiError::Api(self.error.unwrap_or_else(|| "unknown_error".to_string())))
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostMessage<'a> {
    pub channel: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostMessageResponse {
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub ts: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadUrlResponse {
    #[serde(default)]
    pub upload_url: String,
    #[serde(default)]
    pub file_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileReference {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompleteUploadResponse {
    #[serde(default)]
    pub files: Vec<FileReference>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn successful_post() {
        let json = include_str!("./test_assets/post_message_ok.json");
        let envelope: SlackEnvelope<PostMessageResponse> = serde_json::from_str(json).unwrap();
        let response = envelope.into_result().unwrap();
        assert_eq!(response.channel.as_deref(), Some("C0123456789"));
        assert_eq!(response.ts.as_deref(), Some("1711886400.000100"));
    }

    #[test]
    fn rejected_post() {
        let json = r#"{"ok": false, "error": "channel_not_found"}"#;
        let envelope: SlackEnvelope<PostMessageResponse> = serde_json::from_str(json).unwrap();
        match envelope.into_result() {
            Err(SlackApiError::Api(e)) => assert_eq!(e, "channel_not_found"),
            other => panic!("Expected an API error, got {other:?}"),
        }
    }

    #[test]
    fn upload_url() {
        let json = r#"{"ok": true, "upload_url": "https://files.slack.com/upload/v1/abc", "file_id": "F0AB"}"#;
        let response = serde_json::from_str::<SlackEnvelope<UploadUrlResponse>>(json).unwrap().into_result().unwrap();
        assert_eq!(response.file_id, "F0AB");
        assert_eq!(response.upload_url, "https://files.slack.com/upload/v1/abc");
    }
}
