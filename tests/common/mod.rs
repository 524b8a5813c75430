#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use roomkey::config::ably::AblyConfig;
use roomkey::issuer::{IssuerError, TokenIssuer};
use roomkey::modules::auth::model::{TokenEnvelope, TokenRequest};
use roomkey::modules::auth::policy::CapabilityPolicy;
use roomkey::router::init_router;
use roomkey::state::AppState;

/// Issuer that signs nothing: echoes the request back as an envelope, or
/// fails like a rejected authority call.
pub struct FakeIssuer {
    pub fail: bool,
}

#[async_trait]
impl TokenIssuer for FakeIssuer {
    async fn request_token(&self, request: &TokenRequest) -> Result<TokenEnvelope, IssuerError> {
        if self.fail {
            return Err(IssuerError::Rejected {
                status: 401,
                body: "invalid credentials".to_string(),
            });
        }

        Ok(TokenEnvelope {
            token: "fake.token.value".to_string(),
            key_name: "app.key".to_string(),
            issued: 1_700_000_000_000,
            expires: 1_700_000_000_000 + request.ttl as i64,
            capability: request.capability.clone(),
            client_id: Some(request.client_id.clone()),
        })
    }
}

pub fn test_config(policy: CapabilityPolicy) -> AblyConfig {
    AblyConfig {
        api_key: "app.key:secret".to_string(),
        rest_url: "http://127.0.0.1:1".to_string(),
        token_ttl_ms: 3_600_000,
        policy,
    }
}

pub fn test_app() -> axum::Router {
    app_with_issuer(FakeIssuer { fail: false }, CapabilityPolicy::Full)
}

pub fn failing_app() -> axum::Router {
    app_with_issuer(FakeIssuer { fail: true }, CapabilityPolicy::Full)
}

pub fn app_with_issuer(
    issuer: impl TokenIssuer + 'static,
    policy: CapabilityPolicy,
) -> axum::Router {
    init_router(AppState::new(Arc::new(issuer), test_config(policy)))
}
