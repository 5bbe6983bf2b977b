use std::{path::Path, sync::Arc};

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
    RequestBuilder,
};
use serde::de::DeserializeOwned;

use crate::{
    data_objects::{
        CompleteUploadResponse,
        FileReference,
        PostMessage,
        PostMessageResponse,
        SlackEnvelope,
        UploadUrlResponse,
    },
    SlackApiError,
    SlackConfig,
};

#[derive(Clone)]
pub struct SlackApi {
    config: SlackConfig,
    client: Arc<Client>,
}

impl SlackApi {
    pub fn new(config: SlackConfig) -> Result<Self, SlackApiError> {
        let mut headers = HeaderMap::with_capacity(1);
        let val = HeaderValue::from_str(&format!("Bearer {}", config.token.reveal()))
            .map_err(|e| SlackApiError::Initialization(e.to_string()))?;
        headers.insert(AUTHORIZATION, val);
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SlackApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn config(&self) -> &SlackConfig {
        &self.config
    }

    pub fn url(&self, method: &str) -> String {
        format!("{}/{method}", self.config.api_url.trim_end_matches('/'))
    }

    async fn call<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, SlackApiError> {
        let response = req.send().await.map_err(|e| SlackApiError::RestResponseError(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| SlackApiError::RestResponseError(e.to_string()))?;
            return Err(SlackApiError::QueryError { status, message });
        }
        let envelope =
            response.json::<SlackEnvelope<T>>().await.map_err(|e| SlackApiError::JsonError(e.to_string()))?;
        envelope.into_result()
    }

    /// Posts `text` to the configured channel.
    pub async fn post_message(&self, text: &str) -> Result<PostMessageResponse, SlackApiError> {
        let body = PostMessage { channel: &self.config.channel_id, text };
        debug!("Posting message to Slack channel {}", self.config.channel_id);
        let req = self.client.post(self.url("chat.postMessage")).json(&body);
        let result = self.call::<PostMessageResponse>(req).await?;
        info!("Posted message to Slack channel {}", self.config.channel_id);
        Ok(result)
    }

    /// Uploads a file to the configured channel with `comment` as the accompanying message.
    ///
    /// This is the three-step external upload flow: reserve an upload URL, send the bytes, then share the file.
    pub async fn upload_file(&self, path: &Path, comment: &str) -> Result<FileReference, SlackApiError> {
        let attachment_error =
            |reason: String| SlackApiError::Attachment { path: path.display().to_string(), reason };
        let contents = tokio::fs::read(path).await.map_err(|e| attachment_error(e.to_string()))?;
        let filename = path
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .ok_or_else(|| attachment_error("Path has no file name".to_string()))?;

        let length = contents.len().to_string();
        let req = self
            .client
            .post(self.url("files.getUploadURLExternal"))
            .form(&[("filename", filename.as_str()), ("length", length.as_str())]);
        let slot = self.call::<UploadUrlResponse>(req).await?;
        trace!("Reserved Slack upload slot {} for {filename}", slot.file_id);

        let response = self
            .client
            .post(&slot.upload_url)
            .body(contents)
            .send()
            .await
            .map_err(|e| SlackApiError::RestResponseError(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(SlackApiError::QueryError { status, message });
        }

        let files = complete_upload_files(&slot.file_id, &filename)?;
        let req = self.client.post(self.url("files.completeUploadExternal")).form(&[
            ("files", files.as_str()),
            ("channel_id", self.config.channel_id.as_str()),
            ("initial_comment", comment),
        ]);
        let result = self.call::<CompleteUploadResponse>(req).await?;
        info!("Uploaded {filename} to Slack channel {}", self.config.channel_id);
        Ok(result.files.into_iter().next().unwrap_or(FileReference { id: slot.file_id, title: Some(filename) }))
    }
}

fn complete_upload_files(file_id: &str, title: &str) -> Result<String, SlackApiError> {
    let files = [FileReference { id: file_id.to_string(), title: Some(title.to_string()) }];
    serde_json::to_string(&files).map_err(|e| SlackApiError::JsonError(e.to_string()))
}

#[cfg(test)]
mod test {
    use report_common::Secret;

    use super::*;

    #[test]
    fn method_urls() {
        let api = SlackApi::new(SlackConfig::new(Secret::new("xoxb-test".into()), "C01")).unwrap();
        assert_eq!(api.url("chat.postMessage"), "https://slack.com/api/chat.postMessage");
        assert_eq!(api.config().channel_id, "C01");
    }

    #[test]
    fn completion_payload() {
        let files = complete_upload_files("F0AB", "report.csv").unwrap();
        assert_eq!(files, r#"[{"id":"F0AB","title":"report.csv"}]"#);
    }

    #[test]
    fn invalid_token_fails_initialization() {
        let config = SlackConfig::new(Secret::new("xoxb\n".into()), "C01");
        assert!(matches!(SlackApi::new(config), Err(SlackApiError::Initialization(_))));
    }

    #[tokio::test]
    async fn missing_attachment() {
        let api = SlackApi::new(SlackConfig::new(Secret::new("xoxb-test".into()), "C01")).unwrap();
        let err = api.upload_file(Path::new("/no/such/report.csv"), "hi").await.unwrap_err();
        assert!(matches!(err, SlackApiError::Attachment { .. }));
    }
}
