//! Handler for the condense endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::condense::{CondenseRequest, CondenseResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates or retrieves the short link for a URL.
///
/// # Endpoint
///
/// `POST /condense`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/" }
/// ```
///
/// # Response
///
/// ```json
/// { "newUrl": "https://cndns.io/0a1b2c3d" }
/// ```
///
/// Submitting the same URL again (with or without one trailing slash)
/// returns the same short link.
///
/// # Errors
///
/// Returns 400 Bad Request with `A URL is required.` if `url` is missing or
/// empty, and 400 with the parser message if the body is malformed JSON.
/// A request without a JSON content type is treated as an empty body.
pub async fn condense_handler(
    State(state): State<AppState>,
    payload: Result<Json<CondenseRequest>, JsonRejection>,
) -> Result<Json<CondenseResponse>, AppError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(JsonRejection::MissingJsonContentType(_)) => CondenseRequest::default(),
        Err(rejection) => return Err(AppError::validation(rejection.body_text())),
    };

    let record = state
        .condense_service
        .condense(payload.url.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(CondenseResponse {
        new_url: record.short_url(&state.base_url),
    }))
}
