pub mod config;
pub mod error;
pub mod sync;
pub mod watcher;

pub use config::{discover_config, load_config, Config};
pub use error::{ConfigError, Result, RouteSyncError, SyncError, WatchError};
pub use sync::{sync, sync_with_table, RouteMapper, RouteMapping, RouteNameTable};
pub use watcher::RouteWatcher;
