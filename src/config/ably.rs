use std::env;

use crate::modules::auth::policy::CapabilityPolicy;

/// Settings for the Ably token authority and the tokens minted against it.
#[derive(Clone, Debug)]
pub struct AblyConfig {
    /// API key in the form `keyName:keySecret`
    pub api_key: String,
    /// Base URL of the authority's REST endpoint
    pub rest_url: String,
    /// Validity duration of issued tokens, in milliseconds
    pub token_ttl_ms: u64,
    /// Which capability grant table to apply
    pub policy: CapabilityPolicy,
}

impl AblyConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("ABLY_API_KEY").unwrap_or_default(),
            rest_url: env::var("ABLY_REST_URL")
                .unwrap_or_else(|_| "https://rest.ably.io".to_string()),
            token_ttl_ms: env::var("TOKEN_TTL_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3_600_000), // 1 hour
            policy: CapabilityPolicy::from_env(),
        }
    }
}
