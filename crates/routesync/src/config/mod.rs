pub mod loader;
pub mod schema;

pub use loader::{discover_config, load_config, load_config_from_str, CONFIG_BASE_NAME};
pub use schema::Config;
