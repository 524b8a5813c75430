pub mod auth;

pub use self::auth::model::{CapabilityMap, Identity, Operation};
