use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{issue_token, preflight};

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/auth", get(issue_token).post(issue_token).options(preflight))
}
