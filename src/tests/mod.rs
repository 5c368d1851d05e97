//! Integration and unit tests for globview.
//!
//! ## Test Modules
//!
//! - **scanner_tests**: pattern matching over real directory trees
//! - **index_tests**: index construction, filtering and the empty-result error
//! - **api_tests**: the HTTP surface, driven through the real router
//! - **error_tests**: error display and response mapping
//! - **config_tests**: configuration defaults, layering and validation
//!
//! Run a single module with e.g. `cargo test api_tests`.

pub mod scanner_tests;

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Writes `contents` to `root/rel`, creating parent directories.
pub(crate) fn touch(root: &Path, rel: &str, contents: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Layout used across the test modules:
///
/// ```text
/// a.png  b.png  c.txt  d.JPG  .hidden.png
/// photos/x.jpg  photos/nested/y.jpeg  photos/notes.md
/// dir.png/inner.gif
/// .cache/z.png
/// ```
pub(crate) fn create_test_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    touch(base, "a.png", b"png-a");
    touch(base, "b.png", b"png-b");
    touch(base, "c.txt", b"not an image");
    touch(base, "d.JPG", b"jpg-d");
    touch(base, ".hidden.png", b"hidden");
    touch(base, "photos/x.jpg", b"jpg-x");
    touch(base, "photos/nested/y.jpeg", b"jpeg-y");
    touch(base, "photos/notes.md", b"# notes");
    touch(base, "dir.png/inner.gif", b"gif");
    touch(base, ".cache/z.png", b"png-z");
    temp_dir
}
