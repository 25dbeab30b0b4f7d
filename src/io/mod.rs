pub mod config_io;

pub use config_io::{CONFIG_FILE, ConfigError, load_config};
