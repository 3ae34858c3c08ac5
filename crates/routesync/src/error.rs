use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteSyncError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    #[error("Watch error: {0}")]
    Watch(#[from] WatchError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No configuration file [{base_name}.json] found under '{project_root}'")]
    NotFound {
        base_name: String,
        project_root: PathBuf,
    },

    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Schema validation failed: {errors}")]
    SchemaValidation { errors: String },

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Directory scan failed for '{path}': {source}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read source file '{path}': {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write stub '{path}': {source}")]
    WriteStub {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Failed to start watcher: {0}")]
    Start(String),

    #[error("Watch channel disconnected")]
    ChannelClosed,
}

pub type Result<T> = std::result::Result<T, RouteSyncError>;
