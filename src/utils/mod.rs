//! Shared utilities for the Roomkey Auth API.
//!
//! - [`errors`]: Application error types and handling

pub mod errors;
