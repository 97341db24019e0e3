//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Service identification
//! - `GET  /urls`      - All stored records
//! - `POST /condense`  - Create or retrieve a short link
//! - `GET  /{slug}`    - Short link redirect
//!
//! Anything else, including a known path with the wrong method, falls
//! through to the not-found handler.
//!
//! # Middleware (outermost first)
//!
//! - **Tracing** - Structured request/response logging
//! - **Default origin** - Front-end origin when no CORS origin was echoed
//! - **Error rendering** - Error stacks in development mode
//! - **Origin enforcement** - 403 for origins outside the allow-list,
//!   preflight included
//! - **CORS headers** - Allow-listed origins only

use crate::api::handlers::{
    condense_handler, index_handler, list_urls_handler, redirect_handler,
};
use crate::api::middleware::{cors, errors, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalization wraps this router in
/// [`crate::server::run`], since it has to run before routing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/urls", get(list_urls_handler))
        .route("/condense", post(condense_handler))
        .route("/{slug}", get(redirect_handler))
        .fallback(errors::not_found_handler)
        .method_not_allowed_fallback(errors::not_found_handler)
        .layer(cors::layer(&state.cors_allowed_origins))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            cors::enforce_origin,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            errors::render_errors,
        ))
        .layer(middleware::from_fn(cors::default_allow_origin))
        .layer(tracing::layer())
        .with_state(state)
}
