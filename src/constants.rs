//! App-wide constants.
//!
//! Centralises the tool name, config paths and environment variable names
//! so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "thinknum";

/// Crate version, from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.thinknum.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".thinknum.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "thinknum";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "THINKNUM_FORMAT";
pub const ENV_PRECISION: &str = "THINKNUM_PRECISION";
pub const ENV_SHOW_STEPS: &str = "THINKNUM_SHOW_STEPS";
/// Log filter directive, in `tracing_subscriber::EnvFilter` syntax.
pub const ENV_LOG: &str = "THINKNUM_LOG";
