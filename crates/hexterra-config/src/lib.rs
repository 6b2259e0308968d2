//! Configuration system for Hexterra.
//!
//! Provides the generator settings, persisted to disk as RON files. Supports
//! CLI overrides via clap, reload detection, forward/backward compatible
//! serialization, and validation before a grid is generated.

mod cli;
mod config;
mod error;
mod validate;

pub use cli::CliArgs;
pub use config::{
    BiomeConfig, CONFIG_FILE, Config, DebugConfig, DisplayMode, GenerationConfig, GridConfig,
};
pub use error::{ConfigError, ValidationError};
