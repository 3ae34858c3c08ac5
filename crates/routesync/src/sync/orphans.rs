use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::SyncError;
use crate::sync::scanner::TreeScanner;

/// Mark-and-sweep cleanup of the target tree.
///
/// Every file under the target root that is not in the valid target set
/// gets deleted, then directories holding no files at any depth are
/// pruned bottom-up. The valid set contains file targets only; a
/// directory survives by ending up non-empty, never by set membership.
#[derive(Debug, Default)]
pub struct OrphanReconciler;

impl OrphanReconciler {
    pub fn new() -> Self {
        Self
    }

    /// Deletes orphaned files under `target_root` and prunes emptied
    /// directories. A missing target root is a no-op, not an error: a
    /// pass with zero mappings never had a reason to create it.
    pub fn reconcile(
        &self,
        target_root: &Path,
        valid_targets: &HashSet<PathBuf>,
    ) -> Result<(), SyncError> {
        if !target_root.exists() {
            return Ok(());
        }

        let entries = TreeScanner::new(target_root).list_all()?;

        for path in &entries {
            if path.is_dir() || valid_targets.contains(path) {
                continue;
            }
            // Tolerates entries already removed concurrently
            if let Err(e) = std::fs::remove_file(path) {
                debug!("Could not remove orphan {}: {}", path.display(), e);
            }
        }

        prune_empty_dirs(target_root);

        Ok(())
    }
}

/// Removes every descendant directory of `dir` that holds no files at any
/// depth, deepest first. Returns whether `dir` itself ended up with no
/// remaining entries. `dir` itself is never removed; a failed removal
/// counts as non-empty so ancestors stay untouched.
fn prune_empty_dirs(dir: &Path) -> bool {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return false,
    };

    let mut is_empty = true;

    for entry in entries.flatten() {
        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if is_dir {
            if prune_empty_dirs(&path) && std::fs::remove_dir(&path).is_ok() {
                debug!("Pruned empty directory {}", path.display());
            } else {
                is_empty = false;
            }
        } else {
            is_empty = false;
        }
    }

    is_empty
}
