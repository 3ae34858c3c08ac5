use std::io::Write;
use std::path::{Component, Path, PathBuf};

use log::{debug, error};

use crate::error::SyncError;
use crate::sync::mapper::RouteMapping;

/// Creates re-export stub files for route mappings.
///
/// Creation is idempotent: an existing file at the target path is left
/// untouched, whatever its content. Failures are logged per mapping and
/// never abort the batch.
#[derive(Debug, Default)]
pub struct StubWriter;

impl StubWriter {
    pub fn new() -> Self {
        Self
    }

    /// Writes the stub for one mapping if its source is export-eligible.
    /// I/O errors are logged and swallowed so the rest of the batch runs.
    pub fn materialize(&self, mapping: &RouteMapping) {
        if let Err(e) = self.try_materialize(mapping) {
            error!(
                "Failed to create stub at {}: {}",
                mapping.target_path.display(),
                e
            );
        }
    }

    fn try_materialize(&self, mapping: &RouteMapping) -> Result<(), SyncError> {
        let content =
            std::fs::read_to_string(&mapping.source_path).map_err(|e| SyncError::ReadSource {
                path: mapping.source_path.clone(),
                source: e,
            })?;

        if !is_export_eligible(&content) {
            debug!(
                "Skipping {}: no default export found",
                mapping.source_path.display()
            );
            return Ok(());
        }

        let specifier = import_specifier(&mapping.target_path, &mapping.source_path);
        let stub = format!("export {{ default }} from '{}'\n", specifier);

        if let Some(parent) = mapping.target_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SyncError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        // create_new gives atomic check-and-create: an existing stub (or a
        // user-authored file) at the target path is never overwritten
        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&mapping.target_path)
        {
            Ok(mut file) => {
                file.write_all(stub.as_bytes())
                    .map_err(|e| SyncError::WriteStub {
                        path: mapping.target_path.clone(),
                        source: e,
                    })?;
                debug!("Created stub {}", mapping.target_path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                debug!(
                    "Stub already exists, leaving untouched: {}",
                    mapping.target_path.display()
                );
                Ok(())
            }
            Err(e) => Err(SyncError::WriteStub {
                path: mapping.target_path.clone(),
                source: e,
            }),
        }
    }
}

/// Coarse textual heuristic for "this module has a default export": the
/// content must contain both marker substrings. False positives from
/// comments or string literals are accepted in this domain.
fn is_export_eligible(content: &str) -> bool {
    content.contains("export") && content.contains("default")
}

/// Relative import specifier from the stub's directory back to the source
/// file: forward slashes, extension stripped.
fn import_specifier(target_path: &Path, source_path: &Path) -> String {
    let start = target_path.parent().unwrap_or_else(|| Path::new(""));
    let relative = relative_path(start, source_path);

    let mut specifier = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    if let Some(ext) = source_path.extension().and_then(|e| e.to_str()) {
        if let Some(stripped) = specifier.strip_suffix(&format!(".{}", ext)) {
            specifier = stripped.to_string();
        }
    }

    specifier
}

/// Relative path from directory `from` to `to`, both absolute.
fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from_components: Vec<Component> = from.components().collect();
    let to_components: Vec<Component> = to.components().collect();

    let common = from_components
        .iter()
        .zip(to_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..from_components.len() {
        relative.push("..");
    }
    for component in &to_components[common..] {
        relative.push(component.as_os_str());
    }

    relative
}
