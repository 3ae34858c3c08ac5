use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::SyncError;

/// Recursively enumerates every file and directory under a root.
///
/// Both kinds of entry are returned: files feed the route mapper,
/// directories feed orphan detection. Symlinks are not followed.
pub struct TreeScanner {
    root: PathBuf,
}

impl TreeScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns every file and directory path under the root, unbounded
    /// depth, the root itself excluded. No ordering guarantee.
    ///
    /// A missing or unreadable root (or any unreadable subdirectory)
    /// aborts the scan with [`SyncError::ScanFailed`].
    pub fn list_all(&self) -> Result<Vec<PathBuf>, SyncError> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = entry.map_err(|e| SyncError::ScanFailed {
                path: self.root.clone(),
                source: e,
            })?;
            paths.push(entry.into_path());
        }

        Ok(paths)
    }
}
