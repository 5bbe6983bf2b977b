use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackApiError {
    #[error("Could not create the Slack client. {0}")]
    Initialization(String),
    #[error("Could not reach Slack. {0}")]
    RestResponseError(String),
    #[error("Slack returned a response that could not be read. {0}")]
    JsonError(String),
    #[error("Slack returned HTTP {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("Slack rejected the request: {0}")]
    Api(String),
    #[error("Could not read attachment {path}. {reason}")]
    Attachment { path: String, reason: String },
}
