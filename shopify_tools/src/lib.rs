mod api;
mod config;
mod error;
mod order_window;
mod shopify_order;

pub mod helpers;

pub use api::ShopifyApi;
pub use config::ShopifyConfig;
pub use error::ShopifyApiError;
pub use order_window::OrderWindow;
pub use shopify_order::{OrdersResponse, ShopifyOrder};
