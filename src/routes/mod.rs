//! HTTP route handlers for the image viewer.
//!
//! - `ui`: the static viewer page
//! - `images`: the image listing and per-image fetch
//!
//! Anything that is not one of those routes, including non-GET methods on
//! them (`HEAD` too), falls through to a plain-text 404.

pub mod images;
pub mod ui;

use axum::{
    middleware::from_fn,
    routing::{on, MethodFilter},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::middleware::cors_middleware;
use crate::state::AppState;

pub const NOT_FOUND: &str = "Not found";

/// Assembles the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", on(MethodFilter::GET, ui::index_page).fallback(not_found))
        .route("/index.html", on(MethodFilter::GET, ui::index_page).fallback(not_found))
        .route("/images", on(MethodFilter::GET, images::list_images).fallback(not_found))
        .route("/image/{*path}", on(MethodFilter::GET, images::get_image).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(cors_middleware))
}

pub async fn not_found() -> AppError {
    AppError::NotFound(NOT_FOUND)
}
