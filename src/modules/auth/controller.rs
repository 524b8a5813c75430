use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{AuthParams, Identity, TokenEnvelope};
use super::service::AuthService;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Mint a scoped messaging token for the calling identity
///
/// Identity comes from the `x-user-id` header (display name from
/// `x-user-name` or `x-user-full-name`), or from a combined
/// `displayName.userId` client identifier in the query string or form body.
/// Also served on POST with identical semantics.
#[utoipa::path(
    get,
    path = "/auth",
    params(AuthParams),
    responses(
        (status = 200, description = "Token issued", body = TokenEnvelope),
        (status = 400, description = "Identity could not be determined", body = ErrorResponse),
        (status = 500, description = "Token issuance failed", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state))]
pub async fn issue_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AuthParams>,
    form: Result<Form<AuthParams>, FormRejection>,
) -> Result<Json<TokenEnvelope>, AppError> {
    // A POST without a form body is fine as long as headers or the query
    // string carry the identity, so form rejections are not errors here.
    let params = query.or(form.map(|Form(params)| params).unwrap_or_default());

    let identity = Identity::resolve(&headers, &params)
        .map_err(|err| AppError::bad_request(anyhow::anyhow!(err)))?;

    let envelope = AuthService::issue_token(&state.issuer, &state.ably, identity).await?;
    Ok(Json(envelope))
}

/// CORS preflight response advertising the auth surface. The CORS layer
/// contributes `Access-Control-Allow-Origin: *`.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, GET, OPTIONS"),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                "Content-Type, x-user-id, x-user-name, x-user-full-name",
            ),
        ],
    )
}
