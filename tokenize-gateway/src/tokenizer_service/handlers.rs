//! Request handlers for the Tokenizer Service
//!
//! These handlers validate client requests at the HTTP boundary, run them
//! through the [`TokenizeService`] and map its errors to status codes.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error, warn};
use uuid::Uuid;

use super::{
    protocol::{ErrorResponse, HealthResponse, TokenizeRequest, TokenizerListResponse},
    service::TokenizeService,
};
use crate::tokenizer::TokenizerError;

/// Shared state for handlers
pub struct HandlerState {
    pub service: TokenizeService,
}

impl HandlerState {
    pub fn new(service: TokenizeService) -> Self {
        Self { service }
    }
}

/// Health check endpoint. `HEAD` requests get the same status with no body.
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::ok()))
}

/// List the available tokenizer names
pub async fn list_tokenizers_handler(State(state): State<Arc<HandlerState>>) -> impl IntoResponse {
    let tokenizers = state
        .service
        .list_strategies()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(TokenizerListResponse { tokenizers })
}

/// Tokenize endpoint
pub async fn tokenize_handler(
    State(state): State<Arc<HandlerState>>,
    payload: Result<Json<TokenizeRequest>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(&request_id, rejection),
    };

    debug!(
        request_id = %request_id,
        tokenizer = %request.tokenizer,
        text_len = request.text.len(),
        "Processing tokenize request"
    );

    match state.service.handle(&request) {
        Ok(response) => {
            debug!(
                request_id = %request_id,
                tokenizer = %response.tokenizer,
                count = response.count,
                "Tokenize request completed"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(
                request_id = %request_id,
                tokenizer = %request.tokenizer,
                error = %e,
                "Tokenization failed"
            );
            error_response(&e)
        }
    }
}

/// Map a rejected request body to a client error.
///
/// Bodies that are not valid JSON, are not sent as JSON, or do not match the
/// request schema (missing `text`, wrong types, unknown `tokenizer`) are all
/// reported as `422 Unprocessable Entity`. Failures to read the body keep
/// axum's status.
fn rejection_response(request_id: &str, rejection: JsonRejection) -> Response {
    let status = match &rejection {
        JsonRejection::JsonDataError(_)
        | JsonRejection::JsonSyntaxError(_)
        | JsonRejection::MissingJsonContentType(_) => StatusCode::UNPROCESSABLE_ENTITY,
        other => other.status(),
    };

    warn!(
        request_id = %request_id,
        status = %status,
        error = %rejection.body_text(),
        "Rejected tokenize request"
    );

    (
        status,
        Json(ErrorResponse::new(
            rejection.body_text(),
            "invalid_request_error",
            Some("invalid_request"),
        )),
    )
        .into_response()
}

/// Status code for a tokenization failure past request validation
fn error_status(error: &TokenizerError) -> StatusCode {
    match error {
        TokenizerError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        TokenizerError::Load { .. }
        | TokenizerError::UnknownStrategy(_)
        | TokenizerError::Encode { .. }
        | TokenizerError::LengthMismatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: &TokenizerError) -> Response {
    (
        error_status(error),
        Json(ErrorResponse::new(
            error.to_string(),
            "server_error",
            Some(error.code()),
        )),
    )
        .into_response()
}
