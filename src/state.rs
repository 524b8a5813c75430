use std::sync::Arc;

use crate::config::ably::AblyConfig;
use crate::issuer::{AblyRestIssuer, TokenIssuer};

#[derive(Clone)]
pub struct AppState {
    pub issuer: Arc<dyn TokenIssuer>,
    pub ably: AblyConfig,
}

impl AppState {
    pub fn new(issuer: Arc<dyn TokenIssuer>, ably: AblyConfig) -> Self {
        Self { issuer, ably }
    }
}

pub fn init_app_state() -> AppState {
    let ably = AblyConfig::from_env();
    let issuer = AblyRestIssuer::new(&ably.api_key, &ably.rest_url)
        .expect("ABLY_API_KEY must be set in the form keyName:keySecret");

    AppState::new(Arc::new(issuer), ably)
}
