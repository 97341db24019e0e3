//! CORS policy: an explicit origin allow-list.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::config::DEFAULT_CORS_ORIGIN;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the CORS header layer for the configured origins.
///
/// Allowed origins receive `Access-Control-Allow-Origin` echoing their
/// origin, `Access-Control-Allow-Credentials: true` and mirrored request
/// headers. Preflight requests are answered with 200.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}

/// Rejects requests whose `Origin` is not on the allow-list.
///
/// Requests without an `Origin` header (same-origin navigation, curl,
/// server-to-server) are let through.
///
/// # Errors
///
/// Returns `403 Forbidden` with `Origin not allowed by CORS policy`.
pub async fn enforce_origin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = req.headers().get(header::ORIGIN)
        && !is_allowed(&state.cors_allowed_origins, origin)
    {
        tracing::debug!(?origin, "Rejected cross-origin request");
        return Err(AppError::forbidden("Origin not allowed by CORS policy"));
    }

    Ok(next.run(req).await)
}

/// Names the production front-end in `Access-Control-Allow-Origin` on
/// responses that do not carry the header already.
///
/// Cross-origin requests from allowed origins keep the header echoed by
/// [`layer`]; everything else, including error responses, gets the
/// front-end origin.
pub async fn default_allow_origin(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    response
        .headers_mut()
        .entry(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .or_insert(HeaderValue::from_static(DEFAULT_CORS_ORIGIN));

    response
}

fn is_allowed(allowed_origins: &[String], origin: &HeaderValue) -> bool {
    origin
        .to_str()
        .is_ok_and(|origin| allowed_origins.iter().any(|allowed| allowed == origin))
}
