use utoipa::OpenApi;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{Operation, TokenEnvelope, TokenRequest};

#[derive(OpenApi)]
#[openapi(
    paths(crate::modules::auth::controller::issue_token),
    components(schemas(TokenEnvelope, TokenRequest, Operation, ErrorResponse)),
    tags(
        (name = "Auth", description = "Scoped messaging-token issuance")
    )
)]
pub struct ApiDoc;
