//! Configuration loading and layering.
//!
//! Handles `.thinknum.toml` loading, environment variable resolution,
//! and the priority ordering the CLI builds on.

pub mod loader;

pub use loader::{Config, ConfigError, GameConfig, OutputConfig};
