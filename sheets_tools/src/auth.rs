use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use log::*;
use report_common::Secret;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{ServiceAccountKey, SheetsApiError};

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME: Duration = Duration::hours(1);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: Secret<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: i64,
}

/// Builds the signed JWT that is exchanged for an OAuth access token.
pub(crate) fn signed_assertion(key: &ServiceAccountKey, now: DateTime<Utc>) -> Result<String, SheetsApiError> {
    let claims = AssertionClaims {
        iss: key.client_email.clone(),
        scope: SHEETS_SCOPE.to_string(),
        aud: key.token_uri.clone(),
        iat: now.timestamp(),
        exp: (now + ASSERTION_LIFETIME).timestamp(),
    };
    let mut header = Header::new(Algorithm::RS256);
    if !key.private_key_id.is_empty() {
        header.kid = Some(key.private_key_id.clone());
    }
    let signing_key = EncodingKey::from_rsa_pem(key.private_key.reveal().as_bytes())
        .map_err(|e| SheetsApiError::InvalidCredentials(format!("Could not read the private key. {e}")))?;
    encode(&header, &claims, &signing_key).map_err(|e| SheetsApiError::InvalidCredentials(e.to_string()))
}

/// Exchanges a service-account assertion for a bearer token at the key's token URI.
pub(crate) async fn fetch_access_token(
    client: &Client,
    key: &ServiceAccountKey,
) -> Result<AccessToken, SheetsApiError> {
    let assertion = signed_assertion(key, Utc::now())?;
    debug!("Requesting a Sheets access token for {}", key.client_email);
    let response = client
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await
        .map_err(|e| SheetsApiError::TokenExchange(e.to_string()))?;
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        return Err(SheetsApiError::TokenExchange(format!("Error {status}. {message}")));
    }
    let token =
        response.json::<TokenResponse>().await.map_err(|e| SheetsApiError::TokenExchange(e.to_string()))?;
    trace!("Access token obtained. Expires in {}s", token.expires_in);
    Ok(AccessToken { token: Secret::new(token.access_token) })
}
