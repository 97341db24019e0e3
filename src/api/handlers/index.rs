//! Handler for the API root.

use axum::Json;

use crate::api::dto::index::IndexResponse;

/// Identifies the service.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// { "message": "Condensed API" }
/// ```
pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Condensed API",
    })
}
