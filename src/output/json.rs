//! JSON output renderer.
//!
//! Emits the [`Evaluation`] as pretty-printed JSON. Non-finite results
//! (NaN, infinities) become `null`, which is how `serde_json` encodes them.

use crate::models::Evaluation;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, evaluation: &Evaluation) -> String {
        serde_json::to_string_pretty(evaluation).unwrap_or_else(|_| "{}".to_string())
    }
}
