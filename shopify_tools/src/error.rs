use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopifyApiError {
    #[error("Could not create the Shopify client. {0}")]
    Initialization(String),
    #[error("Could not reach the Shopify Admin API. {0}")]
    RequestFailed(String),
    #[error("Shopify returned a response that could not be read. {0}")]
    JsonError(String),
    #[error("Shopify rejected the request with status {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("Invalid currency amount: {0}")]
    InvalidCurrencyAmount(String),
}
