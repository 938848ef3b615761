use std::path::{Path, PathBuf};

use crate::MANIFEST_FILE;

/// The nearest ancestor of `start` (itself included) containing a file
/// named `filename`, or `None` when no ancestor has one.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(filename).is_file())
        .map(Path::to_path_buf)
}

/// Locate the project root: the nearest ancestor of `start` (itself
/// included) that contains a `Jargo.toml`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    find_ancestor_with(start, MANIFEST_FILE)
}

/// Create a directory and any missing parents. Existing directories are
/// fine; an existing non-directory at `path` is an error.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}
