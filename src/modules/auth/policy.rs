//! Capability derivation policy.
//!
//! A pure function of the user id: the display name never affects grants.
//! Anything not granted here is denied by the messaging provider when the
//! token is used, so the tables below are the whole authorization story.

use std::env;

use super::model::{CapabilityMap, Operation};

/// Which grant table to apply when deriving capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapabilityPolicy {
    /// Canonical policy: rooms list, profiles, own conversations, presence
    #[default]
    Full,
    /// Legacy policy: own rooms list plus the shared presence channel only
    Minimal,
}

impl CapabilityPolicy {
    /// Reads `CAPABILITY_POLICY`; anything other than `minimal` selects the
    /// full table.
    pub fn from_env() -> Self {
        match env::var("CAPABILITY_POLICY") {
            Ok(value) if value.eq_ignore_ascii_case("minimal") => CapabilityPolicy::Minimal,
            _ => CapabilityPolicy::Full,
        }
    }

    pub fn derive(&self, user_id: &str) -> CapabilityMap {
        match self {
            CapabilityPolicy::Full => full_capabilities(user_id),
            CapabilityPolicy::Minimal => minimal_capabilities(user_id),
        }
    }
}

/// A user fully manages their own rooms list and profile, may read any
/// profile, converses bidirectionally in channels keyed by their own id on
/// either side, uses the shared presence channel, and may read anything
/// else.
fn full_capabilities(user_id: &str) -> CapabilityMap {
    use Operation::*;

    let mut caps = CapabilityMap::default();
    caps.grant(
        format!("roomslist:{user_id}"),
        [Publish, Subscribe, History, ObjectSubscribe, ObjectPublish],
    );
    caps.grant(format!("profile:{user_id}"), [Publish, Subscribe, History]);
    caps.grant("profile:*", [Subscribe]);
    caps.grant(
        format!("{user_id}:*"),
        [Publish, Subscribe, History, Presence],
    );
    caps.grant(
        format!("*:{user_id}"),
        [Publish, Subscribe, History, Presence],
    );
    caps.grant("presence", [Publish, Subscribe, Presence]);
    caps.grant("*", [Subscribe]);
    caps
}

fn minimal_capabilities(user_id: &str) -> CapabilityMap {
    use Operation::*;

    let mut caps = CapabilityMap::default();
    caps.grant(
        format!("roomslist:{user_id}"),
        [Publish, Subscribe, History, ObjectSubscribe, ObjectPublish],
    );
    caps.grant("presence", [Publish, Subscribe, Presence]);
    caps
}
