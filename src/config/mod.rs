//! Configuration loading and validation.
mod loader;
mod resolve;
pub mod types;


pub use loader::{load_config, load_config_file, prepare_data_dir};
pub use resolve::resolve_config;
pub use types::{Config, ConfigFile, WorkMode, WorkModeKind};
