use std::path::PathBuf;
use std::sync::Arc;

use crate::index::ImageIndex;

const UI_INDEX: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/ui/index.html");

/// The shared application state.
///
/// Cloned into every handler by Axum. Everything in here is read-only after
/// startup, so no locking is involved.
#[derive(Clone)]
pub struct AppState {
    /// The images discovered at startup.
    pub index: Arc<ImageIndex>,
    /// Location of the viewer page. Read from disk on every request.
    pub ui_page: Arc<PathBuf>,
}

impl AppState {
    pub fn new(index: ImageIndex) -> Self {
        Self::with_ui_page(index, default_ui_page())
    }

    pub fn with_ui_page(index: ImageIndex, ui_page: PathBuf) -> Self {
        Self { index: Arc::new(index), ui_page: Arc::new(ui_page) }
    }
}

/// Prefers `<exe_dir>/ui/index.html`, falling back to the page shipped in the
/// source tree.
pub fn default_ui_page() -> PathBuf {
    let runtime_index = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.join("ui").join("index.html")));
    match runtime_index {
        Some(p) if p.is_file() => p,
        _ => PathBuf::from(UI_INDEX),
    }
}
