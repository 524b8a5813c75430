use std::collections::{BTreeMap, BTreeSet};

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

/// Sentinel used when no display name accompanies a user id.
pub const DEFAULT_DISPLAY_NAME: &str = "Unknown_User";

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_NAME_HEADER: &str = "x-user-name";
pub const USER_FULL_NAME_HEADER: &str = "x-user-full-name";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Could not determine user identity: User ID required")]
    Missing,
}

/// Query-string / form-body parameters accepted by the auth endpoint.
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AuthParams {
    /// Combined identifier in the form `displayName.userId`
    pub client_id: Option<String>,
}

impl AuthParams {
    /// Prefer this set of params, falling back to `other` for absent fields.
    pub fn or(self, other: AuthParams) -> AuthParams {
        AuthParams {
            client_id: self
                .client_id
                .filter(|id| !id.trim().is_empty())
                .or(other.client_id),
        }
    }
}

/// The two ways a caller can claim an identity, resolved once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityClaim {
    /// `x-user-id` plus optional display-name header
    Headers {
        user_id: String,
        display_name: Option<String>,
    },
    /// Combined `displayName.userId` from query string or form body
    CombinedClientId(String),
}

impl IdentityClaim {
    pub fn from_request(headers: &HeaderMap, params: &AuthParams) -> Option<Self> {
        if let Some(user_id) = non_empty_header(headers, USER_ID_HEADER) {
            let display_name = non_empty_header(headers, USER_NAME_HEADER)
                .or_else(|| non_empty_header(headers, USER_FULL_NAME_HEADER));
            return Some(IdentityClaim::Headers {
                user_id,
                display_name,
            });
        }

        params
            .client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| IdentityClaim::CombinedClientId(id.to_string()))
    }

    pub fn into_identity(self) -> Option<Identity> {
        match self {
            IdentityClaim::Headers {
                user_id,
                display_name,
            } => Some(Identity {
                user_id,
                display_name: display_name.unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
            }),
            // Split on the last dot so display names may themselves contain
            // dots; a dotless identifier is a bare user id.
            IdentityClaim::CombinedClientId(raw) => match raw.rsplit_once('.') {
                Some((_, user_id)) if user_id.is_empty() => None,
                Some((display_name, user_id)) => Some(Identity {
                    user_id: user_id.to_string(),
                    display_name: if display_name.is_empty() {
                        DEFAULT_DISPLAY_NAME.to_string()
                    } else {
                        display_name.to_string()
                    },
                }),
                None => Some(Identity {
                    user_id: raw,
                    display_name: DEFAULT_DISPLAY_NAME.to_string(),
                }),
            },
        }
    }
}

fn non_empty_header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// A resolved caller identity. `user_id` is always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub display_name: String,
}

impl Identity {
    pub fn resolve(headers: &HeaderMap, params: &AuthParams) -> Result<Self, IdentityError> {
        IdentityClaim::from_request(headers, params)
            .and_then(IdentityClaim::into_identity)
            .ok_or(IdentityError::Missing)
    }

    /// The identity string the client must connect with:
    /// `displayName.userId`, with whitespace runs collapsed to `_` so the
    /// result never contains whitespace.
    pub fn client_id(&self) -> String {
        let mut name = collapse_whitespace(&self.display_name);
        if name.is_empty() {
            name = DEFAULT_DISPLAY_NAME.to_string();
        }
        format!("{}.{}", name, collapse_whitespace(&self.user_id))
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Channel operations a capability can grant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Publish,
    Subscribe,
    History,
    Presence,
    ObjectPublish,
    ObjectSubscribe,
}

/// Allow-list of channel-name patterns to permitted operations.
///
/// Serializes as the JSON object the token authority expects:
/// `{"pattern": ["publish", ...], ...}`. Key order and operation order are
/// not significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityMap(BTreeMap<String, BTreeSet<Operation>>);

impl CapabilityMap {
    pub fn grant(&mut self, pattern: impl Into<String>, ops: impl IntoIterator<Item = Operation>) {
        self.0
            .entry(pattern.into())
            .or_default()
            .extend(ops);
    }

    pub fn operations(&self, pattern: &str) -> Option<&BTreeSet<Operation>> {
        self.0.get(pattern)
    }

    pub fn allows(&self, pattern: &str, op: Operation) -> bool {
        self.operations(pattern).is_some_and(|ops| ops.contains(&op))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The capability text embedded in token requests.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// What the service asks the authority to sign. Opaque to the authority's
/// callers beyond these three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub client_id: String,
    /// Capability map serialized as JSON text
    pub capability: String,
    /// Time-to-live in milliseconds
    pub ttl: u64,
}

/// Signed token envelope as returned by the authority. Fields are echoed to
/// the caller without interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenEnvelope {
    pub token: String,
    pub key_name: String,
    /// Issue timestamp, milliseconds since epoch
    pub issued: i64,
    /// Expiry timestamp, milliseconds since epoch
    pub expires: i64,
    pub capability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}
