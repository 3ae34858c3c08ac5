//! The reconciliation engine: scan → map → write → clean.
//!
//! Every invocation recomputes the full mapping from scratch; there is no
//! cached diff between passes. The only persistent state is the content
//! of the source and target trees themselves.

pub mod mapper;
pub mod names;
pub mod orphans;
pub mod scanner;
pub mod stub;

use std::collections::HashSet;
use std::path::PathBuf;

use log::info;

use crate::config::Config;
use crate::error::SyncError;

pub use mapper::{RouteMapper, RouteMapping};
pub use names::RouteNameTable;
pub use orphans::OrphanReconciler;
pub use scanner::TreeScanner;
pub use stub::StubWriter;

/// Runs one full reconciliation pass with the default name table.
pub fn sync(config: &Config) -> Result<(), SyncError> {
    sync_with_table(config, &RouteNameTable::default())
}

/// Runs one full reconciliation pass: scan the source tree, materialize a
/// stub for every mapping, then sweep the target tree against the valid
/// target set. All stub writes complete before cleanup starts, so a newly
/// valid file is never transiently treated as an orphan.
pub fn sync_with_table(config: &Config, table: &RouteNameTable) -> Result<(), SyncError> {
    let mapper = RouteMapper::new(table.clone(), config.extensions.clone());
    let writer = StubWriter::new();

    let source_paths = TreeScanner::new(&config.pages_dir).list_all()?;
    let mappings = mapper.mappings(&source_paths, &config.pages_dir, &config.app_dir);

    info!(
        "Computed {} route mappings under {}",
        mappings.len(),
        config.pages_dir.display()
    );

    for mapping in &mappings {
        writer.materialize(mapping);
    }

    // Fresh scan for the sweep: the source tree may have changed while
    // stubs were written, and the valid set must reflect it as-is.
    let source_paths = TreeScanner::new(&config.pages_dir).list_all()?;
    let valid_targets: HashSet<PathBuf> = mapper
        .mappings(&source_paths, &config.pages_dir, &config.app_dir)
        .into_iter()
        .map(|mapping| mapping.target_path)
        .collect();

    OrphanReconciler::new().reconcile(&config.app_dir, &valid_targets)
}
