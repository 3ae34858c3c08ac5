use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for one sync target, as authored in `routesync.config.json`.
///
/// `app_dir` and `pages_dir` may be relative in the file; the loader
/// resolves them against the project root before the core ever sees them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Keep running and re-sync on filesystem changes under `pages_dir`.
    #[serde(default)]
    pub watch: bool,
    /// Accepted source file extensions, each carrying the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Target root: the generated app-style route tree.
    pub app_dir: PathBuf,
    /// Source root: the author-written pages-style route tree.
    pub pages_dir: PathBuf,
    #[serde(default)]
    pub verbose: bool,
}

fn default_extensions() -> Vec<String> {
    vec![
        ".js".to_string(),
        ".jsx".to_string(),
        ".ts".to_string(),
        ".tsx".to_string(),
    ]
}

impl Config {
    /// Resolves `app_dir` and `pages_dir` against `project_root` when relative.
    pub fn resolve_against(mut self, project_root: &Path) -> Self {
        if self.app_dir.is_relative() {
            self.app_dir = project_root.join(&self.app_dir);
        }
        if self.pages_dir.is_relative() {
            self.pages_dir = project_root.join(&self.pages_dir);
        }
        self
    }
}
