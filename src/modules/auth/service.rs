use std::sync::Arc;

use tracing::instrument;

use crate::config::ably::AblyConfig;
use crate::issuer::TokenIssuer;
use crate::utils::errors::AppError;

use super::model::{Identity, TokenEnvelope, TokenRequest};

pub struct AuthService;

impl AuthService {
    /// Derive capabilities for the identity and exchange them for a signed
    /// token. A single delegated call, no retries; authority failures come
    /// back as a 500 with the authority's message in `details`.
    #[instrument(skip(issuer))]
    pub async fn issue_token(
        issuer: &Arc<dyn TokenIssuer>,
        config: &AblyConfig,
        identity: Identity,
    ) -> Result<TokenEnvelope, AppError> {
        let client_id = identity.client_id();
        let capability = config.policy.derive(&identity.user_id);

        let request = TokenRequest {
            client_id: client_id.clone(),
            capability: capability.to_json()?,
            ttl: config.token_ttl_ms,
        };

        let mut envelope = issuer.request_token(&request).await.map_err(|err| {
            AppError::internal(anyhow::anyhow!("Token issuance failed"))
                .with_details(err.to_string())
        })?;

        // Authorities may omit clientId in the envelope; callers rely on it
        // matching the request.
        if envelope.client_id.is_none() {
            envelope.client_id = Some(client_id);
        }

        Ok(envelope)
    }
}
