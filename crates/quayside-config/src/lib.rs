//! Configuration for the Quayside dashboard client.
//!
//! Provides TOML-based configuration with:
//! - API origin and base URL (`[api]`), overridable by `QUAYSIDE_API_BASE_URL`
//! - Durable storage location for the token store (`[storage]`)
//! - Mock backend switches per resource family (`[mock]`, `[mock.families]`)
//! - Config file layering (user config dir + project-local overrides)

pub mod discovery;
pub mod error;
pub mod types;

pub use discovery::{
    LoadedConfig, load_config, load_config_file, load_config_with_options, user_config_dir,
    user_config_path,
};
pub use error::{ConfigError, Result};
pub use types::*;
