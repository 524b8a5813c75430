//! # Roomkey Auth API
//!
//! A token vending service built with Rust and Axum that mints scoped,
//! time-limited realtime-messaging tokens for chat clients.
//!
//! ## Overview
//!
//! Chat clients cannot be trusted with the messaging provider's API key, so
//! they call this service instead. The service resolves the caller's
//! identity, derives an allow-list of channel capabilities for that identity,
//! and asks the provider's token authority to sign a token carrying exactly
//! those capabilities:
//!
//! - **Identity resolution**: from `x-user-id`/`x-user-name` headers, or from
//!   a combined `name.userId` client identifier in the query string or form
//!   body
//! - **Capability derivation**: a pure policy function mapping a user id to
//!   the channel patterns and operations that user may use
//! - **Token issuance**: a single delegated call to the authority's REST
//!   token-request endpoint; the signed envelope is returned to the caller
//!   unchanged
//!
//! The service holds no state between requests: no sessions, no cache, no
//! persistence. Enforcement of the issued capabilities is entirely the
//! messaging provider's job.
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (server, messaging provider)
//! ├── issuer.rs         # Token authority client (trait + REST implementation)
//! ├── modules/          # Feature modules
//! │   └── auth/        # Identity resolution, capability policy, issuance
//! ├── router.rs         # Main application router
//! └── utils/           # Shared utilities (errors)
//! ```
//!
//! The auth module follows the controller/service/model/router split used
//! throughout; the capability policy lives in its own `policy` submodule so
//! the legacy minimal grant table can be swapped in by configuration.
//!
//! ## Quick Start
//!
//! ```bash
//! ABLY_API_KEY=appId.keyId:keySecret cargo run
//! curl -H 'x-user-id: u1' -H 'x-user-name: Jane Doe' localhost:3000/auth
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar` while the
//! server is running.

pub mod config;
pub mod docs;
pub mod issuer;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
