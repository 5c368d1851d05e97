use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use std::path::PathBuf;

/// Failures while building the image index at startup.
///
/// Every variant is fatal: the server never starts listening after one of
/// these is returned.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The user-supplied glob could not be compiled.
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    /// The directory walk hit an unreadable entry.
    #[error("error walking {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Nothing left after the image filter.
    #[error("no images found matching the pattern '{pattern}'")]
    NoImages { pattern: String },
}

/// Per-request failures. None of these ever terminate the process.
#[derive(Debug)]
pub enum AppError {
    /// Unknown route, non-member image path or an image that vanished from disk.
    /// Carries the plain-text body sent to the client.
    NotFound(&'static str),
    /// Reading a server-side resource failed. The client sees only the
    /// generic message; the detail is logged.
    Io {
        message: &'static str,
        source: std::io::Error,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Io { message, source } => write!(f, "I/O error: {}: {}", message, source),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io { source, .. } => Some(source),
            AppError::NotFound(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            AppError::Io { message, source } => {
                tracing::error!("I/O error: {}: {}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

/// A type alias for `Result<T, AppError>`, used by the route handlers.
pub type AppResult<T> = Result<T, AppError>;
