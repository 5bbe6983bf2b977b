use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsApiError {
    #[error("Could not create the Sheets client. {0}")]
    Initialization(String),
    #[error("Invalid service account credentials: {0}")]
    InvalidCredentials(String),
    #[error("Could not obtain an access token: {0}")]
    TokenExchange(String),
    #[error("Could not build a Sheets request. {0}")]
    RestRequestError(String),
    #[error("Could not reach the Sheets API. {0}")]
    RestResponseError(String),
    #[error("The Sheets API returned a response that could not be read. {0}")]
    JsonError(String),
    #[error("The Sheets API rejected the request with status {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("The spreadsheet has no tab named '{0}'")]
    SheetNotFound(String),
}
