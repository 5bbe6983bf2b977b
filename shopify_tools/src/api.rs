use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;

use crate::{
    config::ShopifyConfig,
    shopify_order::OrdersResponse,
    OrderWindow,
    ShopifyApiError,
    ShopifyOrder,
};

#[derive(Clone)]
pub struct ShopifyApi {
    config: ShopifyConfig,
    client: Arc<Client>,
}

impl ShopifyApi {
    pub fn new(config: ShopifyConfig) -> Result<Self, ShopifyApiError> {
        let mut token = HeaderValue::from_str(config.admin_access_token.reveal())
            .map_err(|e| ShopifyApiError::Initialization(format!("Admin access token is not a valid header. {e}")))?;
        token.set_sensitive(true);
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert("X-Shopify-Access-Token", token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ShopifyApiError::Initialization(e.to_string()))?;
        debug!("Shopify client ready for {} (API {})", config.shop, config.api_version);
        Ok(Self { config, client: Arc::new(client) })
    }

    /// Sends a GET to the Admin API `path` and deserializes the JSON reply.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T, ShopifyApiError> {
        let url = self.url(path);
        trace!("GET {url}");
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| ShopifyApiError::RequestFailed(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ShopifyApiError::QueryError { status: status.as_u16(), message });
        }
        trace!("Shopify replied with {status}");
        response.json::<T>().await.map_err(|e| ShopifyApiError::JsonError(e.to_string()))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/admin/api/{}{path}", self.config.api_base.trim_end_matches('/'), self.config.api_version)
    }

    /// Fetches every order (of any status) created inside `window`.
    ///
    /// Only the first page of results is returned. Shopify's default page size applies.
    pub async fn fetch_orders(&self, window: &OrderWindow) -> Result<Vec<ShopifyOrder>, ShopifyApiError> {
        let created_at_min = window.created_at_min();
        let created_at_max = window.created_at_max();
        let params = order_query_params(&created_at_min, &created_at_max);
        debug!("Fetching orders created in {window}");
        let result = self.get_json::<OrdersResponse>("/orders.json", &params).await?;
        info!("Fetched {} orders created in {window}", result.orders.len());
        Ok(result.orders)
    }
}

fn order_query_params<'a>(created_at_min: &'a str, created_at_max: &'a str) -> [(&'static str, &'a str); 3] {
    [("created_at_min", created_at_min), ("created_at_max", created_at_max), ("status", "any")]
}
