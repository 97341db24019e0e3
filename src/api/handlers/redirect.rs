//! Handler for short link redirects.

use axum::{
    extract::{OriginalUri, Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::middleware::errors::not_found;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::slug_generator::is_valid_slug;

/// Redirects a slug to its original URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Response
///
/// `301 Moved Permanently` with `Location: <originalUrl>`.
///
/// # Errors
///
/// Returns 404 Not Found (`Not Found - /<slug>`) if no record has this slug.
/// Paths that cannot be slugs are rejected without a store lookup.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    OriginalUri(uri): OriginalUri,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !is_valid_slug(&slug) {
        return Err(not_found(&uri));
    }

    let Some(record) = state.condense_service.resolve(&slug).await? else {
        return Err(not_found(&uri));
    };

    let location = HeaderValue::from_str(&record.original_url).map_err(|_| {
        AppError::internal(format!(
            "Stored URL for slug {} is not a valid Location header",
            record.slug
        ))
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
