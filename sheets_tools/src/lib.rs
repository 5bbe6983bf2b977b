//! A small Google Sheets v4 REST client, authenticated with a service-account key.

mod api;
mod auth;
mod config;
mod error;

pub mod data_objects;
pub mod ranges;

pub use api::SheetsApi;
pub use auth::{AccessToken, SHEETS_SCOPE};
pub use config::{ServiceAccountKey, SheetsConfig, DEFAULT_AUTH_URI, DEFAULT_TOKEN_URI};
pub use error::SheetsApiError;
