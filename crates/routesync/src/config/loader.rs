use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::ConfigError;

const SCHEMA_JSON: &str = include_str!("../../../../schema/config-v1.json");

/// Base name of the configuration file probed under the project root.
pub const CONFIG_BASE_NAME: &str = "routesync.config";

/// Locates `routesync.config.json` under `project_root`.
pub fn discover_config<P: AsRef<Path>>(project_root: P) -> Result<PathBuf, ConfigError> {
    let project_root = project_root.as_ref();
    let candidate = project_root.join(format!("{}.json", CONFIG_BASE_NAME));

    if candidate.is_file() {
        Ok(candidate)
    } else {
        Err(ConfigError::NotFound {
            base_name: CONFIG_BASE_NAME.to_string(),
            project_root: project_root.to_path_buf(),
        })
    }
}

/// Loads, validates and resolves the config at `path`. Relative `appDir`
/// and `pagesDir` entries are resolved against `project_root`.
pub fn load_config<P: AsRef<Path>>(path: P, project_root: &Path) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(load_config_from_str(&content)?.resolve_against(project_root))
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let json_value: serde_json::Value = serde_json::from_str(content)?;

    validate_schema(&json_value)?;

    let config: Config = serde_json::from_value(json_value)?;

    validate_config(&config)?;

    Ok(config)
}

fn validate_schema(json_value: &serde_json::Value) -> Result<(), ConfigError> {
    let schema: serde_json::Value =
        serde_json::from_str(SCHEMA_JSON).map_err(|e| ConfigError::Validation {
            message: format!("Invalid embedded schema JSON: {}", e),
        })?;

    let validator = jsonschema::validator_for(&schema).map_err(|e| ConfigError::Validation {
        message: format!("Failed to compile JSON schema: {}", e),
    })?;

    let error_messages: Vec<String> = validator
        .iter_errors(json_value)
        .map(|e| format!("{} at {}", e, e.instance_path()))
        .collect();
    if !error_messages.is_empty() {
        return Err(ConfigError::SchemaValidation {
            errors: error_messages.join("; "),
        });
    }

    Ok(())
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.extensions.is_empty() {
        return Err(ConfigError::Validation {
            message: "extensions must not be empty".to_string(),
        });
    }

    for ext in &config.extensions {
        if !ext.starts_with('.') || ext.len() < 2 {
            return Err(ConfigError::Validation {
                message: format!("Invalid extension '{}': must start with a dot", ext),
            });
        }
    }

    if config.app_dir == config.pages_dir {
        return Err(ConfigError::Validation {
            message: "appDir and pagesDir must differ".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_valid_config() {
        let config_json = r#"
        {
            "watch": true,
            "extensions": [".tsx"],
            "appDir": "src/app",
            "pagesDir": "src/pages",
            "verbose": false
        }
        "#;

        let config = load_config_from_str(config_json).unwrap();
        assert!(config.watch);
        assert_eq!(config.extensions, vec![".tsx"]);
        assert_eq!(config.app_dir, PathBuf::from("src/app"));
        assert_eq!(config.pages_dir, PathBuf::from("src/pages"));
    }

    #[test]
    fn test_missing_required_dirs() {
        let result = load_config_from_str(r#"{"watch": false}"#);
        assert!(matches!(
            result,
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn test_extension_without_dot_rejected() {
        let config_json = r#"
        {
            "extensions": ["tsx"],
            "appDir": "src/app",
            "pagesDir": "src/pages"
        }
        "#;

        // Caught by the schema pattern before semantic validation runs
        let result = load_config_from_str(config_json);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_extensions_rejected() {
        let config_json = r#"
        {
            "extensions": [],
            "appDir": "src/app",
            "pagesDir": "src/pages"
        }
        "#;

        let result = load_config_from_str(config_json);
        assert!(result.is_err());
    }

    #[test]
    fn test_identical_dirs_rejected() {
        let config_json = r#"
        {
            "appDir": "src/routes",
            "pagesDir": "src/routes"
        }
        "#;

        let result = load_config_from_str(config_json);
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let config_json = r#"
        {
            "appDir": "src/app",
            "pagesDir": "src/pages",
            "wokDir": "src/pages"
        }
        "#;

        let result = load_config_from_str(config_json);
        assert!(matches!(
            result,
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn test_discover_config_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = discover_config(dir.path());
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_discover_and_load() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("routesync.config.json"),
            r#"{"appDir": "app", "pagesDir": "pages"}"#,
        )
        .unwrap();

        let path = discover_config(dir.path()).unwrap();
        let config = load_config(&path, dir.path()).unwrap();
        assert_eq!(config.app_dir, dir.path().join("app"));
        assert_eq!(config.pages_dir, dir.path().join("pages"));
    }
}
