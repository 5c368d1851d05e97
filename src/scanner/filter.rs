//! Narrows pattern matches down to recognized image formats.

use std::path::Path;

/// Extensions (lowercase, without the dot) the server is willing to index.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg"];

/// Returns true when the path's extension, compared case-insensitively, is a
/// recognized image format.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Keeps only image files, preserving input order.
pub fn filter_images<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Vec<P> {
    paths.into_iter().filter(|p| is_image_file(p.as_ref())).collect()
}
