use log::*;
use report_common::Secret;

pub const DEFAULT_API_VERSION: &str = "2024-04";
const SHOPIFY_DOMAIN_SUFFIX: &str = ".myshopify.com";

#[derive(Debug, Clone, Default)]
pub struct ShopifyConfig {
    /// The storefront domain, e.g. "my-shop.myshopify.com"
    pub shop: String,
    pub admin_access_token: Secret<String>,
    pub api_version: String,
    /// Scheme and host that Admin API paths are appended to. Defaults to `https://{shop}`.
    pub api_base: String,
}

impl ShopifyConfig {
    /// `shop` may be a bare shop handle ("my-shop") or a full domain. Handles are expanded to the myshopify domain.
    pub fn new(shop: &str, admin_access_token: Secret<String>, api_version: Option<String>) -> Self {
        let api_version = api_version.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| {
            warn!("🪛️ No Shopify API version was configured, using {DEFAULT_API_VERSION} as default");
            DEFAULT_API_VERSION.to_string()
        });
        let shop = shop_domain(shop);
        let api_base = format!("https://{shop}");
        Self { shop, admin_access_token, api_version, api_base }
    }
}

fn shop_domain(shop: &str) -> String {
    let shop = shop.trim().trim_start_matches("https://").trim_end_matches('/');
    if shop.contains('.') {
        shop.to_string()
    } else {
        format!("{shop}{SHOPIFY_DOMAIN_SUFFIX}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shop_handles_are_expanded() {
        let config = ShopifyConfig::new("acme", Secret::new("t".into()), Some("2024-01".into()));
        assert_eq!(config.shop, "acme.myshopify.com");
        assert_eq!(config.api_version, "2024-01");
        assert_eq!(config.api_base, "https://acme.myshopify.com");
        let config = ShopifyConfig::new("https://acme.myshopify.com/", Secret::default(), None);
        assert_eq!(config.shop, "acme.myshopify.com");
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
    }
}
