//! Error middleware: the not-found generator and the terminal renderer.

use axum::{
    extract::{OriginalUri, Request, State},
    http::Uri,
    middleware::Next,
    response::Response,
};

use crate::error::{AppError, ErrorReport};
use crate::state::AppState;

/// Builds the not-found error for a request URI.
pub fn not_found(uri: &Uri) -> AppError {
    AppError::not_found(format!("Not Found - {uri}"))
}

/// Router fallback for unmatched paths and unmatched methods.
pub async fn not_found_handler(OriginalUri(uri): OriginalUri) -> AppError {
    not_found(&uri)
}

/// Terminal error renderer.
///
/// [`AppError`] responses leave the handler with the production body. In
/// development mode this layer re-renders them with the error stack
/// included.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/urls", get(list_urls_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), errors::render_errors));
/// ```
pub async fn render_errors(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let response = next.run(req).await;

    if !state.environment.exposes_error_stack() {
        return response;
    }

    match response.extensions().get::<ErrorReport>() {
        Some(report) => report.clone().into_response(true),
        None => response,
    }
}
