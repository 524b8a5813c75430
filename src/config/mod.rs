//! Configuration modules for the Roomkey Auth API.
//!
//! Each submodule handles a specific aspect of configuration, loaded from
//! environment variables with sensible defaults.
//!
//! # Modules
//!
//! - [`ably`]: Messaging provider credentials, token TTL and capability policy
//! - [`server`]: Listening port

pub mod ably;
pub mod server;
