use std::path::PathBuf;

use report_common::Secret;

pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";

#[derive(Debug, Clone, Default)]
pub struct SlackConfig {
    pub token: Secret<String>,
    pub channel_id: String,
    /// When set, notifications are sent as an upload of this file with the message as its comment.
    pub attachment: Option<PathBuf>,
    pub api_url: String,
}

impl SlackConfig {
    pub fn new(token: Secret<String>, channel_id: &str) -> Self {
        Self { token, channel_id: channel_id.to_string(), attachment: None, api_url: DEFAULT_SLACK_API_URL.to_string() }
    }

    pub fn with_attachment(mut self, attachment: Option<PathBuf>) -> Self {
        self.attachment = attachment;
        self
    }
}
