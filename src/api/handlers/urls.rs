//! Handler for listing stored records.

use axum::{Json, extract::State};

use crate::api::dto::url_record::UrlRecordResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns every stored record, oldest first.
///
/// # Endpoint
///
/// `GET /urls`
///
/// # Response
///
/// ```json
/// [
///   {
///     "originalUrl": "https://example.com",
///     "slug": "0a1b2c3d",
///     "createdAt": "2024-01-01T00:00:00Z"
///   }
/// ]
/// ```
///
/// # Errors
///
/// Returns 404 Not Found with `No urls found.` when the store is empty.
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlRecordResponse>>, AppError> {
    let records = state.condense_service.list().await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}
