//! Configuration file loading for clarity
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Environment variables (`CLARITY_` prefix, `__` between section and key)
//! 3. Project root: `./clarity.toml` or `./.clarity.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/clarity/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEndpointConfig, FileOutputConfig, FileReplConfig,
    FileSubmissionConfig,
};
pub use loader::ConfigLoader;
