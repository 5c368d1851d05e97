#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::ScanConfig;
    use crate::error::ScanError;
    use crate::scanner::find_matches;
    use crate::tests::{create_test_tree, touch};

    fn paths(v: &[&str]) -> Vec<PathBuf> {
        v.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn star_matches_top_level_files_only() {
        let dir = create_test_tree();
        let found = find_matches("*.png", dir.path(), &ScanConfig::default()).unwrap();
        // dir.png is a directory and .hidden.png is hidden
        assert_eq!(found, paths(&["a.png", "b.png"]));
    }

    #[test]
    fn double_star_descends() {
        let dir = create_test_tree();
        let found = find_matches("**/*.{jpg,jpeg}", dir.path(), &ScanConfig::default()).unwrap();
        assert_eq!(found, paths(&["photos/nested/y.jpeg", "photos/x.jpg"]));
    }

    #[test]
    fn literal_prefix_limits_walk() {
        let dir = create_test_tree();
        let found = find_matches("photos/*", dir.path(), &ScanConfig::default()).unwrap();
        assert_eq!(found, paths(&["photos/notes.md", "photos/x.jpg"]));
    }

    #[test]
    fn leading_dot_slash_is_ignored() {
        let dir = create_test_tree();
        let plain = find_matches("photos/**/*.jpg", dir.path(), &ScanConfig::default()).unwrap();
        let dotted = find_matches("./photos/**/*.jpg", dir.path(), &ScanConfig::default()).unwrap();
        assert_eq!(plain, dotted);
        assert_eq!(plain, paths(&["photos/x.jpg"]));
    }

    #[test]
    fn hidden_entries_need_opt_in_or_explicit_pattern() {
        let dir = create_test_tree();
        let found = find_matches("**/*.png", dir.path(), &ScanConfig::default()).unwrap();
        assert!(!found.iter().any(|p| p.to_string_lossy().contains(".cache")));
        assert!(!found.contains(&PathBuf::from(".hidden.png")));

        let opts = ScanConfig { include_hidden: true, follow_symlinks: false };
        let found = find_matches("**/*.png", dir.path(), &opts).unwrap();
        assert!(found.contains(&PathBuf::from(".cache/z.png")));
        assert!(found.contains(&PathBuf::from(".hidden.png")));

        let found = find_matches(".cache/*.png", dir.path(), &ScanConfig::default()).unwrap();
        assert_eq!(found, paths(&[".cache/z.png"]));
    }

    #[test]
    fn directories_are_never_returned() {
        let dir = create_test_tree();
        let found = find_matches("**/*", dir.path(), &ScanConfig::default()).unwrap();
        assert!(!found.contains(&PathBuf::from("dir.png")));
        assert!(!found.contains(&PathBuf::from("photos")));
        assert!(found.contains(&PathBuf::from("dir.png/inner.gif")));
    }

    #[test]
    fn empty_pattern_and_missing_base_yield_nothing() {
        let dir = create_test_tree();
        assert!(find_matches("", dir.path(), &ScanConfig::default()).unwrap().is_empty());
        assert!(find_matches("nope/*.png", dir.path(), &ScanConfig::default()).unwrap().is_empty());
        assert!(find_matches("*.tiff", dir.path(), &ScanConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let dir = create_test_tree();
        let err = find_matches("[invalid", dir.path(), &ScanConfig::default()).unwrap_err();
        assert!(matches!(err, ScanError::Pattern { .. }));
    }

    #[test]
    fn absolute_pattern_returns_root_relative_paths() {
        let dir = create_test_tree();
        let pattern = format!("{}/photos/*.jpg", dir.path().to_str().unwrap().replace('\\', "/"));
        let found = find_matches(&pattern, dir.path(), &ScanConfig::default()).unwrap();
        assert_eq!(found, paths(&["photos/x.jpg"]));
    }

    #[test]
    fn top_level_pattern_stays_in_its_directory() {
        let dir = create_test_tree();
        touch(dir.path(), "deep/er/still/e.png", b"deep");
        let found = find_matches("*/*.jpg", dir.path(), &ScanConfig::default()).unwrap();
        assert_eq!(found, paths(&["photos/x.jpg"]));
    }

    #[cfg(unix)]
    #[test]
    fn unreachable_unreadable_directories_are_not_walked() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = create_test_tree();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        touch(dir.path(), "locked/secret.png", b"secret");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let top = find_matches("*.png", dir.path(), &ScanConfig::default());
        let pruned = find_matches("ph*/**/*.jpg", dir.path(), &ScanConfig::default());

        // restore so TempDir can clean up
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(top.unwrap(), paths(&["a.png", "b.png"]));
        assert_eq!(pruned.unwrap(), paths(&["photos/x.jpg"]));
    }

    #[test]
    fn file_as_base_matches_nothing() {
        let dir = create_test_tree();
        // a.png is a file: nothing can live below it
        let found = find_matches("a.png/*.png", dir.path(), &ScanConfig::default()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn parent_directory_patterns_are_relative_to_root() {
        let dir = create_test_tree();
        touch(dir.path(), "other/x.png", b"x");
        let root = dir.path().join("photos");
        let found = find_matches("../other/*.png", &root, &ScanConfig::default()).unwrap();
        assert_eq!(found, paths(&["../other/x.png"]));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_base_is_an_io_error() {
        let dir = create_test_tree();
        // a.png is a file, so stat of a.png/sub fails with ENOTDIR
        let err = find_matches("a.png/sub/*.png", dir.path(), &ScanConfig::default()).unwrap_err();
        assert!(matches!(err, ScanError::Io(_)));
    }
}
