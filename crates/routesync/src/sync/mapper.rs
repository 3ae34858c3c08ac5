use std::path::{Path, PathBuf};

use crate::sync::names::RouteNameTable;

/// A single source file together with the stub path it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMapping {
    pub source_path: PathBuf,
    pub target_path: PathBuf,
}

/// Computes target paths for source files whose name is recognized.
///
/// Pure: no filesystem access. The rewrite is structural — the relative
/// directory chain between the roots is carried over segment by segment
/// and only the final filename is substituted, so a directory that
/// happens to be named after a recognized stem (e.g. `pages/page/page.tsx`)
/// is never corrupted.
pub struct RouteMapper {
    table: RouteNameTable,
    extensions: Vec<String>,
    patterns: Vec<String>,
}

impl RouteMapper {
    pub fn new(table: RouteNameTable, extensions: Vec<String>) -> Self {
        let patterns = table.patterns(&extensions);
        Self {
            table,
            extensions,
            patterns,
        }
    }

    /// Filters `paths` down to recognized route files under `source_root`
    /// and computes the corresponding target path for each.
    pub fn mappings(
        &self,
        paths: &[PathBuf],
        source_root: &Path,
        target_root: &Path,
    ) -> Vec<RouteMapping> {
        paths
            .iter()
            .filter_map(|path| self.map_one(path, source_root, target_root))
            .collect()
    }

    fn map_one(&self, path: &Path, source_root: &Path, target_root: &Path) -> Option<RouteMapping> {
        let file_name = path.file_name()?.to_str()?;
        if !self.patterns.iter().any(|pattern| pattern == file_name) {
            return None;
        }
        let (stem, ext) = self.split_recognized(file_name)?;
        let target_stem = self.table.target_stem(stem)?;

        let relative = path.strip_prefix(source_root).ok()?;
        let relative_dir = relative.parent().unwrap_or_else(|| Path::new(""));

        let target_path = target_root
            .join(relative_dir)
            .join(format!("{}{}", target_stem, ext));

        Some(RouteMapping {
            source_path: path.to_path_buf(),
            target_path,
        })
    }

    /// Splits `file_name` into stem and accepted extension, or rejects it.
    /// The stem must match a recognized name exactly: `mypage.tsx` does
    /// not qualify even though it ends in `page.tsx`.
    fn split_recognized<'a>(&'a self, file_name: &'a str) -> Option<(&'a str, &'a str)> {
        for ext in &self.extensions {
            if let Some(stem) = file_name.strip_suffix(ext.as_str()) {
                if !stem.is_empty() && self.table.target_stem(stem).is_some() {
                    return Some((stem, ext));
                }
            }
        }
        None
    }
}
