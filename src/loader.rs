use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Failed to scan directory at {path}: {source}")]
    DirectoryScanError {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// Directories that never contain the user's own acceptance tests.
const SKIP_DIRS: &[&str] = &["vendor", "testdata"];

/// Collects every Go source file under `root`, in a stable sorted order.
///
/// `vendor/`, `testdata/` and hidden directories are skipped; a `root` that is
/// itself a `.go` file is returned as-is.
pub fn discover_go_files(root: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if root.is_file() {
        if is_go_file(root) {
            return Ok(vec![root.to_path_buf()]);
        }
        return Err(LoadError::InvalidPath(format!(
            "not a Go source file: {}",
            root.display()
        )));
    }
    if !root.is_dir() {
        return Err(LoadError::InvalidPath(root.display().to_string()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped(e));
    for entry in walker {
        let entry = entry.map_err(|e| LoadError::DirectoryScanError {
            path: root.to_path_buf(),
            source: e,
        })?;
        if entry.file_type().is_file() && is_go_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = files.len(), "discovered Go files");
    Ok(files)
}

fn is_go_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("go")
}

fn is_skipped(entry: &DirEntry) -> bool {
    // The root itself is never skipped, whatever it is called.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    match entry.file_name().to_str() {
        Some(name) => name.starts_with('.') || SKIP_DIRS.contains(&name),
        None => false,
    }
}
