//! Run configuration, read once from the environment at start-up.
//!
//! | Variable                          | Required | Notes                                                      |
//! |-----------------------------------|----------|------------------------------------------------------------|
//! | `SHOP_NAME`                       | yes      | shop handle (`acme`) or full domain (`acme.myshopify.com`) |
//! | `API_VERSION`                     | no       | Shopify Admin API version, defaults to `2024-04`           |
//! | `ADMIN_API_ACCESS_TOKEN`          | yes      |                                                            |
//! | `GOOGLE_SHEET_ID`                 | yes      |                                                            |
//! | `SLACK_API_TOKEN`                 | yes      |                                                            |
//! | `SLACK_CHANNEL_ID`                | yes      |                                                            |
//! | `SLACK_ATTACHMENT_PATH`           | no       | upload this file with the notification                     |
//! | `REPORT_SESSION_COUNT`            | no       | defaults to 1000                                           |
//! | `GOOGLE_APPLICATION_CREDENTIALS`  | *        | path to a service-account key file                         |
//! | `GOOGLE_*` key fields             | *        | used when no key file is given                             |
//!
//! Either `GOOGLE_APPLICATION_CREDENTIALS` or at least `GOOGLE_PRIVATE_KEY` and `GOOGLE_CLIENT_EMAIL` must be set.
use std::{env, path::PathBuf};

use log::*;
use report_common::Secret;
use sheets_tools::{ServiceAccountKey, SheetsConfig, DEFAULT_AUTH_URI, DEFAULT_TOKEN_URI};
use shopify_tools::ShopifyConfig;
use slack_tools::SlackConfig;

use crate::{analytics::DEFAULT_SESSION_COUNT, errors::ConfigError};

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub shopify: ShopifyConfig,
    pub sheets: SheetsConfig,
    pub slack: SlackConfig,
    /// Fed to the static session source until a real analytics integration exists.
    pub session_count: u64,
}

impl ReportConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup. Blank values count as unset.
    ///
    /// Every missing required variable is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where F: Fn(&str) -> Option<String> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut missing = Vec::new();
        let mut required = |name: &str| {
            get(name).unwrap_or_else(|| {
                missing.push(name.to_string());
                String::default()
            })
        };
        let shop = required("SHOP_NAME");
        let admin_access_token = Secret::new(required("ADMIN_API_ACCESS_TOKEN"));
        let spreadsheet_id = required("GOOGLE_SHEET_ID");
        let slack_token = Secret::new(required("SLACK_API_TOKEN"));
        let channel_id = required("SLACK_CHANNEL_ID");
        let source = match get("GOOGLE_APPLICATION_CREDENTIALS") {
            Some(path) => CredentialSource::KeyFile(path),
            None => CredentialSource::KeyFields {
                private_key: required("GOOGLE_PRIVATE_KEY"),
                client_email: required("GOOGLE_CLIENT_EMAIL"),
            },
        };
        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        let credentials = match source {
            CredentialSource::KeyFile(path) => {
                info!("🪛️ Using the Google service account key in {path}");
                ServiceAccountKey::from_file(&path).map_err(|e| ConfigError::InvalidCredentials(e.to_string()))?
            },
            CredentialSource::KeyFields { private_key, client_email } => {
                let key = service_account_from_fields(&get, private_key, client_email);
                key.validate().map_err(|e| ConfigError::InvalidCredentials(e.to_string()))?;
                info!("🪛️ Using the Google service account {} from the environment", key.client_email);
                key
            },
        };

        let shopify = ShopifyConfig::new(&shop, admin_access_token, get("API_VERSION"));
        let sheets = SheetsConfig::new(&spreadsheet_id, credentials);
        let attachment = get("SLACK_ATTACHMENT_PATH").map(PathBuf::from);
        if let Some(path) = &attachment {
            info!("🪛️ Notifications will upload {}", path.display());
        }
        let slack = SlackConfig::new(slack_token, &channel_id).with_attachment(attachment);
        let session_count = session_count(get("REPORT_SESSION_COUNT"))?;
        Ok(Self { shopify, sheets, slack, session_count })
    }
}

enum CredentialSource {
    KeyFile(String),
    KeyFields { private_key: String, client_email: String },
}

fn service_account_from_fields<G>(get: &G, private_key: String, client_email: String) -> ServiceAccountKey
where G: Fn(&str) -> Option<String> {
    let optional = |name: &str| get(name).unwrap_or_default();
    ServiceAccountKey {
        key_type: "service_account".to_string(),
        project_id: optional("GOOGLE_PROJECT_ID"),
        private_key_id: optional("GOOGLE_PRIVATE_KEY_ID"),
        private_key: Secret::new(ServiceAccountKey::unescape_private_key(&private_key)),
        client_email,
        client_id: optional("GOOGLE_CLIENT_ID"),
        auth_uri: get("GOOGLE_AUTH_URI").unwrap_or_else(|| DEFAULT_AUTH_URI.to_string()),
        token_uri: get("GOOGLE_TOKEN_URI").unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
        auth_provider_x509_cert_url: optional("GOOGLE_AUTH_PROVIDER_X509_CERT_URL"),
        client_x509_cert_url: optional("GOOGLE_CLIENT_X509_CERT_URL"),
    }
}

fn session_count(value: Option<String>) -> Result<u64, ConfigError> {
    match value {
        None => {
            info!("🪛️ REPORT_SESSION_COUNT is not set. Using the default value of {DEFAULT_SESSION_COUNT}.");
            Ok(DEFAULT_SESSION_COUNT)
        },
        Some(s) => s.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
            name: "REPORT_SESSION_COUNT".to_string(),
            reason: format!("{s} is not a whole number. {e}"),
        }),
    }
}

#[cfg(test)]
mod test {
    use std::{collections::HashMap, io::Write};

    use super::*;

    const TEST_KEY: &str = include_str!("./test_assets/test_key.pem");

    fn base_env() -> HashMap<&'static str, String> {
        HashMap::from([
            ("SHOP_NAME", "acme".to_string()),
            ("ADMIN_API_ACCESS_TOKEN", "shpat_secret".to_string()),
            ("GOOGLE_SHEET_ID", "1AbC".to_string()),
            ("SLACK_API_TOKEN", "xoxb-secret".to_string()),
            ("SLACK_CHANNEL_ID", "C0123".to_string()),
            ("GOOGLE_PRIVATE_KEY", TEST_KEY.replace('\n', "\\n")),
            ("GOOGLE_CLIENT_EMAIL", "reporter@shop-reports.iam.gserviceaccount.com".to_string()),
            ("GOOGLE_PRIVATE_KEY_ID", "kid-1".to_string()),
        ])
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<ReportConfig, ConfigError> {
        ReportConfig::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn load_from_discrete_fields() {
        let config = load(&base_env()).unwrap();
        assert_eq!(config.shopify.shop, "acme.myshopify.com");
        assert_eq!(config.shopify.api_version, "2024-04");
        assert_eq!(config.shopify.admin_access_token.reveal(), "shpat_secret");
        assert_eq!(config.sheets.spreadsheet_id, "1AbC");
        assert_eq!(config.sheets.credentials.private_key_id, "kid-1");
        assert_eq!(config.sheets.credentials.token_uri, DEFAULT_TOKEN_URI);
        assert_eq!(config.sheets.credentials.private_key.reveal(), TEST_KEY);
        assert_eq!(config.slack.channel_id, "C0123");
        assert!(config.slack.attachment.is_none());
        assert_eq!(config.session_count, DEFAULT_SESSION_COUNT);
    }

    #[test]
    fn secrets_do_not_leak_into_debug_output() {
        let config = load(&base_env()).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("shpat_secret"));
        assert!(!debug.contains("xoxb-secret"));
        assert!(!debug.contains("PRIVATE KEY"));
    }

    #[test]
    fn all_missing_variables_are_reported() {
        let mut env = base_env();
        env.remove("SHOP_NAME");
        env.remove("SLACK_CHANNEL_ID");
        env.insert("GOOGLE_CLIENT_EMAIL", "   ".to_string());
        match load(&env) {
            Err(ConfigError::MissingVariables(missing)) => {
                assert_eq!(missing, vec!["SHOP_NAME", "SLACK_CHANNEL_ID", "GOOGLE_CLIENT_EMAIL"]);
            },
            other => panic!("Expected missing variables, got {other:?}"),
        }
    }

    #[test]
    fn key_file_takes_precedence() {
        let key = serde_json::json!({
            "type": "service_account",
            "private_key_id": "from-file",
            "private_key": TEST_KEY,
            "client_email": "file@shop-reports.iam.gserviceaccount.com",
        });
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(key.to_string().as_bytes()).unwrap();
        let mut env = base_env();
        env.remove("GOOGLE_PRIVATE_KEY");
        env.remove("GOOGLE_CLIENT_EMAIL");
        env.insert("GOOGLE_APPLICATION_CREDENTIALS", file.path().display().to_string());
        let config = load(&env).unwrap();
        assert_eq!(config.sheets.credentials.private_key_id, "from-file");
        assert_eq!(config.sheets.credentials.client_email, "file@shop-reports.iam.gserviceaccount.com");
    }

    #[test]
    fn unreadable_key_file() {
        let mut env = base_env();
        env.insert("GOOGLE_APPLICATION_CREDENTIALS", "/no/such/key.json".to_string());
        assert!(matches!(load(&env), Err(ConfigError::InvalidCredentials(_))));
    }

    #[test]
    fn optional_settings() {
        let mut env = base_env();
        env.insert("API_VERSION", "2024-07".to_string());
        env.insert("REPORT_SESSION_COUNT", "2500".to_string());
        env.insert("SLACK_ATTACHMENT_PATH", "/tmp/report.csv".to_string());
        let config = load(&env).unwrap();
        assert_eq!(config.shopify.api_version, "2024-07");
        assert_eq!(config.session_count, 2500);
        assert_eq!(config.slack.attachment, Some(PathBuf::from("/tmp/report.csv")));

        env.insert("REPORT_SESSION_COUNT", "lots".to_string());
        assert!(matches!(load(&env), Err(ConfigError::InvalidValue { .. })));
    }
}
