//! Configuration file management and resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    ResolveOptions, ResolvedConfig, Xl8Config, resolve_config,
};
