use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{helpers::parse_shopify_price, ShopifyApiError};

/// The subset of a Shopify order record that the daily report relies on. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopifyOrder {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    pub total_price: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub financial_status: Option<String>,
}

impl ShopifyOrder {
    /// An order carrying nothing but its total. Used to stand in for API results in tests.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn with_price(total_price: &str) -> Self {
        Self { total_price: total_price.to_string(), ..Default::default() }
    }

    pub fn total_price_amount(&self) -> Result<Decimal, ShopifyApiError> {
        parse_shopify_price(&self.total_price)
    }
}

/// Body of `GET /orders.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<ShopifyOrder>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_orders() {
        let json = include_str!("./test_assets/orders.json");
        let response: OrdersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.orders.len(), 2);
        let order = &response.orders[0];
        assert_eq!(order.id, 450789469);
        assert_eq!(order.name.as_deref(), Some("#1001"));
        assert_eq!(order.total_price, "10.00");
        assert_eq!(order.total_price_amount().unwrap(), Decimal::new(1000, 2));
        assert_eq!(response.orders[1].total_price_amount().unwrap(), Decimal::new(500, 2));
    }

    #[test]
    fn missing_orders_key_is_empty() {
        let response: OrdersResponse = serde_json::from_str("{}").unwrap();
        assert!(response.orders.is_empty());
    }
}
