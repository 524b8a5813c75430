use axum::http::{HeaderName, Method, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::controller::preflight;
use crate::modules::auth::router::init_auth_router;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_auth_router())
        .route("/health", get(health))
        .fallback(fallback)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    header::CONTENT_TYPE,
                    HeaderName::from_static("x-user-id"),
                    HeaderName::from_static("x-user-name"),
                    HeaderName::from_static("x-user-full-name"),
                ]),
        )
        .layer(middleware::from_fn(logging_middleware))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Unknown routes: preflights still get their 204, everything else is a
/// JSON 404.
async fn fallback(method: Method) -> axum::response::Response {
    if method == Method::OPTIONS {
        return preflight().await.into_response();
    }

    AppError::not_found(anyhow::anyhow!("Not Found")).into_response()
}
