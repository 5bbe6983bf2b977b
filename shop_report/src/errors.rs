use sheets_tools::SheetsApiError;
use shopify_tools::ShopifyApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {}", .0.join(", "))]
    MissingVariables(Vec<String>),
    #[error("Invalid value for {name}. {reason}")]
    InvalidValue { name: String, reason: String },
    #[error("Invalid Google credentials. {0}")]
    InvalidCredentials(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Could not initialize the report. {0}")]
    InitializeError(String),
    #[error("Could not fetch orders from Shopify. {0}")]
    ShopifyError(#[from] ShopifyApiError),
    #[error("Could not write the report to Google Sheets. {0}")]
    SheetsError(#[from] SheetsApiError),
}
