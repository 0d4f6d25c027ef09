//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use thinknum::config::Config;
use thinknum::output::OutputFormat;

use args::Cli;

/// Output settings after CLI flags are layered over the loaded config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub precision: usize,
    pub show_steps: bool,
}

impl Settings {
    /// Apply the highest-priority layer: flags given on the command line.
    pub fn resolve(cli: &Cli, config: &Config, steps_flag: bool) -> Self {
        Self {
            format: cli.format.unwrap_or(config.output.format),
            precision: cli.precision.unwrap_or(config.output.precision),
            show_steps: steps_flag || config.game.show_steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["thinknum", "--format", "json", "--precision", "2", "add", "1", "2"]);
        let config = Config::default();
        let settings = Settings::resolve(&cli, &config, false);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.precision, 2);
        assert!(!settings.show_steps);
    }

    #[test]
    fn config_used_when_flags_absent() {
        let cli = Cli::parse_from(["thinknum", "think", "4"]);
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.output.precision = 5;
        config.game.show_steps = true;
        let settings = Settings::resolve(&cli, &config, false);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.precision, 5);
        assert!(settings.show_steps);
    }
}
