//! Glob pattern matching against the filesystem.
//!
//! The pattern is compiled with `globset` (literal separators, so `*` stays
//! within one directory while `**` crosses them) and evaluated against every
//! non-directory entry produced by a `walkdir` traversal. The traversal starts
//! at the longest wildcard-free directory prefix of the pattern, which keeps
//! `photos/**/*.jpg` from walking anything outside `photos/`.
//!
//! Below that prefix the walk only goes where a match is still possible: a
//! pattern without `**` bounds the depth to its remaining component count,
//! and directories whose name fails the component glob at their depth are
//! never opened. Unreadable directories the pattern cannot reach therefore
//! never surface as walk errors.

pub mod filter;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;
use crate::error::ScanError;

pub use filter::{filter_images, is_image_file, IMAGE_EXTENSIONS};

const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

/// A compiled user pattern together with where to start walking.
#[derive(Debug, Clone)]
pub struct Pattern {
    matcher: GlobMatcher,
    base: PathBuf,
    absolute: bool,
    names_hidden: bool,
    /// Deepest level below `base` a match can sit at; `None` with `**`.
    max_depth: Option<usize>,
    /// Globs for the directory components directly below `base`, one per
    /// depth, up to the first `**`.
    dir_components: Vec<GlobMatcher>,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, ScanError> {
        let source = normalize_pattern(pattern);
        let matcher = GlobBuilder::new(&source)
            .literal_separator(true)
            .build()
            .map_err(|e| ScanError::Pattern { pattern: pattern.to_string(), source: e })?
            .compile_matcher();
        let names_hidden = source
            .split('/')
            .any(|c| c.starts_with('.') && c != "." && c != "..");
        let (max_depth, dir_components) = walk_plan(&source);
        Ok(Self {
            base: literal_base(&source),
            absolute: Path::new(&source).is_absolute(),
            matcher,
            names_hidden,
            max_depth,
            dir_components,
        })
    }

    /// Directory the walk starts from, relative to the scan root unless the
    /// pattern is absolute.
    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.matcher.is_match(candidate)
    }

    /// Whether a directory named `name`, `depth` levels below the base, can
    /// still contain a match.
    pub fn may_descend(&self, depth: usize, name: &OsStr) -> bool {
        match depth.checked_sub(1).and_then(|i| self.dir_components.get(i)) {
            Some(component) => name.to_str().map(|n| component.is_match(n)).unwrap_or(false),
            None => true,
        }
    }
}

/// Resolves `pattern` under `root` and returns the matching files, relative
/// to `root` where possible. Directories are never returned. An empty pattern
/// or a missing literal prefix yields an empty list; the caller decides
/// whether that is an error.
pub fn find_matches(pattern: &str, root: &Path, options: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    if pattern.trim().is_empty() {
        return Ok(Vec::new());
    }
    let pattern = Pattern::new(pattern)?;
    let start = root.join(pattern.base());
    match std::fs::metadata(&start) {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("walk base {} does not exist", start.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(ScanError::Io(e)),
    }

    let allow_hidden = options.include_hidden || pattern.names_hidden;
    let mut walker = WalkDir::new(&start).follow_links(options.follow_symlinks).sort_by_file_name();
    if let Some(depth) = pattern.max_depth() {
        walker = walker.max_depth(depth);
    }
    let walker = walker.into_iter().filter_entry(|e| {
        if e.depth() == 0 {
            return true;
        }
        if !allow_hidden && is_hidden(e) {
            return false;
        }
        !e.file_type().is_dir() || pattern.may_descend(e.depth(), e.file_name())
    });

    let mut matches = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| ScanError::Walk {
            path: e.path().map(Path::to_path_buf).unwrap_or_else(|| start.clone()),
            source: e,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let candidate = if pattern.is_absolute() { entry.path() } else { relative };
        let Some(candidate) = candidate.to_str() else {
            tracing::warn!("Skipping non UTF-8 path: {}", entry.path().display());
            continue;
        };
        if pattern.is_match(&candidate.replace('\\', "/")) {
            matches.push(relative.to_path_buf());
        }
    }
    Ok(matches)
}

fn normalize_pattern(pattern: &str) -> String {
    let mut norm = pattern.trim().replace('\\', "/");
    while let Some(rest) = norm.strip_prefix("./") {
        norm = rest.to_string();
    }
    norm
}

/// Number of leading wildcard-free directory components. The final
/// component is always treated as the file part, even when literal.
fn literal_dir_count(components: &[&str]) -> usize {
    components[..components.len().saturating_sub(1)]
        .iter()
        .take_while(|c| !c.contains(&GLOB_META[..]))
        .count()
}

fn literal_base(pattern: &str) -> PathBuf {
    let components: Vec<&str> = pattern.split('/').collect();
    let joined = components[..literal_dir_count(&components)].join("/");
    if joined.is_empty() && pattern.starts_with('/') {
        PathBuf::from("/")
    } else {
        PathBuf::from(joined)
    }
}

/// Depth bound and per-depth directory globs for the part of the pattern
/// below the literal base. A component that does not compile on its own
/// (brace alternation spanning a `/`) disables both.
fn walk_plan(pattern: &str) -> (Option<usize>, Vec<GlobMatcher>) {
    let components: Vec<&str> = pattern.split('/').collect();
    let rest = &components[literal_dir_count(&components)..];
    let recursive = rest.iter().any(|c| c.contains("**"));

    let dirs: Vec<&str> = if recursive {
        rest.iter().take_while(|c| !c.contains("**")).copied().collect()
    } else {
        rest[..rest.len().saturating_sub(1)].to_vec()
    };
    let mut matchers = Vec::with_capacity(dirs.len());
    for dir in dirs {
        match GlobBuilder::new(dir).literal_separator(true).build() {
            Ok(glob) => matchers.push(glob.compile_matcher()),
            Err(_) => return (None, Vec::new()),
        }
    }
    let max_depth = if recursive { None } else { Some(rest.len()) };
    (max_depth, matchers)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().map(|s| s.starts_with('.')).unwrap_or(false)
}
