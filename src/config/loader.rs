//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. `.thinknum.toml` in the working directory
//! 4. `~/.config/thinknum/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{CONFIG_DIR, CONFIG_FILENAME, ENV_FORMAT, ENV_PRECISION, ENV_SHOW_STEPS};
use crate::env::Env;
use crate::output::OutputFormat;
use crate::output::terminal::DEFAULT_PRECISION;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub game: GameConfig,
}

/// How results are printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Maximum fractional digits in terminal output.
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Settings for the `think` command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Print each intermediate step, not just the answer.
    pub show_steps: bool,
}

/// One config file as written: only the keys it actually sets are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    output: OutputLayer,
    game: GameLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct OutputLayer {
    format: Option<OutputFormat>,
    precision: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct GameLayer {
    show_steps: Option<bool>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `.thinknum.toml` in `dir`, then
    /// applies environment variable overrides.
    pub fn load(dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        let local = dir.map(|d| d.join(CONFIG_FILENAME));
        Self::load_layers(global.as_deref(), local.as_deref(), env)
    }

    /// Load from explicit file locations. Missing files are skipped.
    pub fn load_layers(
        global: Option<&Path>,
        local: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        for path in [global, local].into_iter().flatten() {
            if path.exists() {
                debug!(path = %path.display(), "loading config file");
                let layer = Self::load_file(path)?;
                config.merge(layer);
            }
        }

        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load the keys set in a specific file.
    fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Overwrite every key the layer sets, including ones set back to
    /// their default value.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(format) = layer.output.format {
            self.output.format = format;
        }
        if let Some(precision) = layer.output.precision {
            self.output.precision = precision;
        }
        if let Some(show_steps) = layer.game.show_steps {
            self.game.show_steps = show_steps;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        match env.parse::<OutputFormat>(ENV_FORMAT) {
            Some(Ok(format)) => self.output.format = format,
            Some(Err(raw)) => warn!("ignoring invalid {ENV_FORMAT} value: {raw}"),
            None => {}
        }
        match env.parse::<usize>(ENV_PRECISION) {
            Some(Ok(precision)) => self.output.precision = precision,
            Some(Err(raw)) => warn!("ignoring invalid {ENV_PRECISION} value: {raw}"),
            None => {}
        }
        match env.flag(ENV_SHOW_STEPS) {
            Some(Ok(show)) => self.game.show_steps = show,
            Some(Err(raw)) => warn!("ignoring invalid {ENV_SHOW_STEPS} value: {raw}"),
            None => {}
        }
    }
}
