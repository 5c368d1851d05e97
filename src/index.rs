//! The immutable set of images the server is allowed to serve.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::scanner;

/// One discovered image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Path relative to the scan root (absolute if the file lies outside it).
    pub relative: String,
    /// `relative` resolved against the scan root with `.` and `..` folded
    /// away. This is the identifier clients see and the token checked on
    /// every image request.
    pub absolute: String,
}

impl ImageEntry {
    pub fn absolute_path(&self) -> &Path {
        Path::new(&self.absolute)
    }
}

/// Ordered, read-only index of discovered images.
///
/// Built exactly once by [`build_index`] and shared behind an `Arc`; there is
/// no way to mutate it after construction.
#[derive(Debug, Clone)]
pub struct ImageIndex {
    root: PathBuf,
    entries: Vec<ImageEntry>,
    by_absolute: HashMap<String, usize>,
}

impl ImageIndex {
    /// Resolves each relative path against `root`. Paths that are not valid
    /// UTF-8 once joined are skipped, and two relative paths resolving to the
    /// same absolute path are indexed once.
    pub fn from_relative<I, P>(root: &Path, relative: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut entries = Vec::new();
        let mut by_absolute = HashMap::new();
        for rel in relative {
            let rel = rel.as_ref();
            let absolute = resolve(root, rel);
            let (Some(rel_str), Some(abs_str)) = (rel.to_str(), absolute.to_str()) else {
                tracing::warn!("Skipping non UTF-8 path: {}", absolute.display());
                continue;
            };
            if by_absolute.contains_key(abs_str) {
                continue;
            }
            by_absolute.insert(abs_str.to_string(), entries.len());
            entries.push(ImageEntry { relative: rel_str.to_string(), absolute: abs_str.to_string() });
        }
        Self { root: root.to_path_buf(), entries, by_absolute }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn relative_paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.relative.as_str())
    }

    pub fn absolute_paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.absolute.as_str())
    }

    /// Exact membership lookup by absolute path. No normalization, prefix or
    /// case folding is applied to `absolute`.
    pub fn lookup(&self, absolute: &str) -> Option<&ImageEntry> {
        self.by_absolute.get(absolute).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, absolute: &str) -> bool {
        self.by_absolute.contains_key(absolute)
    }
}

/// Joins `relative` onto `root` and folds `.`/`..` components lexically.
/// Symlinks are left alone, so the result is exactly the string a client
/// will send back.
pub fn resolve(root: &Path, relative: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in root.join(relative).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Runs the pattern matcher and image filter under `root` and builds the
/// index. An empty result is an error: the server must not start without
/// anything to serve.
pub fn build_index(pattern: &str, root: &Path, options: &ScanConfig) -> Result<ImageIndex, ScanError> {
    let matches = scanner::find_matches(pattern, root, options)?;
    tracing::debug!("{} files matched '{}'", matches.len(), pattern);

    let images = scanner::filter_images(matches);
    let index = ImageIndex::from_relative(root, &images);
    if index.is_empty() {
        return Err(ScanError::NoImages { pattern: pattern.to_string() });
    }
    Ok(index)
}
