mod api;
mod config;
mod error;

pub mod data_objects;

pub use api::SlackApi;
pub use config::SlackConfig;
pub use error::SlackApiError;
