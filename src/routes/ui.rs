use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub const PAGE_LOAD_ERROR: &str = "Error loading page";

// Read from disk on every request; failures are a 500, never fatal
pub async fn index_page(State(state): State<AppState>) -> AppResult<Response> {
    let body = tokio::fs::read(state.ui_page.as_path())
        .await
        .map_err(|source| AppError::Io { message: PAGE_LOAD_ERROR, source })?;
    Ok(([(CONTENT_TYPE, "text/html")], body).into_response())
}
