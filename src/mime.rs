use std::path::Path;

pub const OCTET_STREAM: &str = "application/octet-stream";

/// Content type for a file, by extension. Unknown or missing extensions fall
/// back to `application/octet-stream`.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return OCTET_STREAM,
    };
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "html" => "text/html",
        "js" => "text/javascript",
        "css" => "text/css",
        _ => OCTET_STREAM,
    }
}
