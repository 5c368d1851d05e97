use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::mime::content_type_for;
use crate::state::AppState;

pub const IMAGE_NOT_FOUND: &str = "Image not found";

/// `GET /images`: every absolute path in the index, in index order.
pub async fn list_images(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.index.absolute_paths().map(str::to_owned).collect())
}

/// `GET /image/{*path}`: the bytes of one indexed image.
///
/// The decoded tail must equal an indexed absolute path exactly; that lookup
/// is the only thing standing between a client and arbitrary file reads.
/// A file that disappeared after the scan is reported as missing, not as a
/// server fault.
pub async fn get_image(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Response> {
    let Ok(Path(requested)) = path else {
        return Err(AppError::NotFound(IMAGE_NOT_FOUND));
    };
    let entry = state.index.lookup(&requested).ok_or(AppError::NotFound(IMAGE_NOT_FOUND))?;

    let content_type = content_type_for(entry.absolute_path());
    match tokio::fs::read(entry.absolute_path()).await {
        Ok(bytes) => Ok(([(CONTENT_TYPE, content_type)], bytes).into_response()),
        Err(e) => {
            tracing::warn!("Indexed image {} is no longer readable: {}", entry.absolute, e);
            Err(AppError::NotFound(IMAGE_NOT_FOUND))
        }
    }
}
