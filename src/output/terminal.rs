//! Terminal renderer: one colored line per result, plus the worked steps
//! when the evaluation carries them.

use colored::Colorize;

use crate::models::Evaluation;
use crate::output::{OutputRenderer, format_number};

/// Default maximum number of fractional digits shown.
pub const DEFAULT_PRECISION: usize = 10;

/// Terminal output renderer with colored text.
pub struct TerminalRenderer {
    pub precision: usize,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl TerminalRenderer {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    fn num(&self, value: f64) -> String {
        format_number(value, self.precision)
    }
}

impl OutputRenderer for TerminalRenderer {
    fn render(&self, evaluation: &Evaluation) -> String {
        let mut output = String::new();
        let result = self.num(evaluation.result).green().bold();

        if let Some(op) = evaluation.binary_operation() {
            output.push_str(&format!(
                " {} {} {} = {}\n",
                self.num(evaluation.operands[0]),
                op.symbol(),
                self.num(evaluation.operands[1]),
                result
            ));
            return output;
        }

        let input = evaluation
            .operands
            .iter()
            .map(|v| self.num(*v))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!(
            " {} {}\n",
            "Thinking of".dimmed(),
            input.bold()
        ));

        for step in &evaluation.steps {
            output.push_str(&format!(
                "   {} {} {} {} = {}\n",
                format!("{}.", step.index + 1).dimmed(),
                self.num(step.lhs),
                step.operation.symbol(),
                self.num(step.rhs),
                self.num(step.result)
            ));
        }

        output.push_str(&format!(" {} {}\n", "→".cyan(), result));
        output
    }
}
