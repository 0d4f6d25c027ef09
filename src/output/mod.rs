//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::Evaluation;

/// Trait for rendering an evaluation to an output format.
pub trait OutputRenderer {
    /// Render the evaluation to a string.
    fn render(&self, evaluation: &Evaluation) -> String;
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render the evaluation using the renderer for this format.
    ///
    /// `precision` only affects terminal output; JSON carries full `f64`s.
    pub fn render(&self, evaluation: &Evaluation, precision: usize) -> String {
        match self {
            OutputFormat::Terminal => terminal::TerminalRenderer::new(precision).render(evaluation),
            OutputFormat::Json => json::JsonRenderer.render(evaluation),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported output format: '{other}'. Supported: terminal, json"
            )),
        }
    }
}

/// Format `value` with at most `precision` fractional digits.
///
/// Trailing zeros and a dangling decimal point are trimmed, so `5.0`
/// renders as `5` and `1.0 / 3.0` as `0.3333333333` at precision 10.
/// Non-finite values render as `NaN`, `inf` and `-inf`.
pub fn format_number(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let mut s = format!("{value:.precision$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
