//! Token authority client.
//!
//! The service never signs tokens itself; it forwards a token request to the
//! messaging provider's REST authority, which performs the cryptographic
//! signing. The authority is reached through the [`TokenIssuer`] trait so
//! tests can substitute a fake.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::modules::auth::model::{TokenEnvelope, TokenRequest};

#[derive(Debug, Error)]
pub enum IssuerError {
    #[error("invalid API key: expected `keyName:keySecret`")]
    InvalidApiKey,

    #[error("token request transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("authority rejected token request with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Abstract trait for the external token issuing authority.
///
/// One operation: exchange a (clientId, capability, ttl) request for a
/// signed token envelope. Retry and timeout behavior belong to the
/// implementation, not the callers.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn request_token(&self, request: &TokenRequest) -> Result<TokenEnvelope, IssuerError>;
}

/// Production issuer speaking the Ably REST token-request endpoint.
///
/// `POST {rest_url}/keys/{keyName}/requestToken` with HTTP basic auth from
/// the API key. The authority signs the token; the response body is the
/// envelope returned to clients.
pub struct AblyRestIssuer {
    http: Client,
    rest_url: String,
    key_name: String,
    key_secret: String,
}

impl AblyRestIssuer {
    pub fn new(api_key: &str, rest_url: &str) -> Result<Self, IssuerError> {
        let (key_name, key_secret) = api_key.split_once(':').ok_or(IssuerError::InvalidApiKey)?;
        if key_name.is_empty() || key_secret.is_empty() {
            return Err(IssuerError::InvalidApiKey);
        }

        Ok(Self {
            http: Client::new(),
            rest_url: rest_url.trim_end_matches('/').to_string(),
            key_name: key_name.to_string(),
            key_secret: key_secret.to_string(),
        })
    }
}

#[async_trait]
impl TokenIssuer for AblyRestIssuer {
    async fn request_token(&self, request: &TokenRequest) -> Result<TokenEnvelope, IssuerError> {
        let url = format!("{}/keys/{}/requestToken", self.rest_url, self.key_name);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.key_name, Some(&self.key_secret))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IssuerError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
