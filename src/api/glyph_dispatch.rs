use tracing::{debug, warn};

use crate::core::{ErrorPolicy, format_display};
use crate::error::CalcResult;
use crate::interaction::Glyph;
use crate::render::Renderer;

use super::{Calculator, CalculatorMode};

/// Display text after a strict-mode evaluation failure.
pub const ERROR_DISPLAY: &str = "Error";

impl<R: Renderer> Calculator<R> {
    /// Applies one glyph, exactly as if its button had been confirmed.
    ///
    /// Returns `false` when the glyph was refused because its text does not
    /// fit the input buffer; state is then unchanged.
    pub fn activate(&mut self, glyph: Glyph) -> bool {
        debug!(glyph = glyph.label(), mode = self.mode.name(), "glyph activated");
        match glyph {
            Glyph::Digit(_)
            | Glyph::Decimal
            | Glyph::Operator(_)
            | Glyph::OpenParen
            | Glyph::CloseParen
            | Glyph::Function(_)
            | Glyph::Pi
            | Glyph::Euler => {
                if let Some(text) = glyph.input_text() {
                    if self.append_input(text).is_err() {
                        return false;
                    }
                }
            }
            Glyph::Equals => self.commit_evaluation(),
            Glyph::Clear => {
                self.input.clear();
                self.display = self.input.display_text().to_owned();
            }
            Glyph::Delete => {
                self.input.delete_last();
                self.display = self.input.display_text().to_owned();
            }
            Glyph::Mode => {
                let previous = self.mode;
                self.mode = self.mode.next();
                debug!(from = previous.name(), to = self.mode.name(), "mode changed");
            }
            Glyph::Graph => self.plot_input(),
        }
        true
    }

    /// Appends text to the input buffer and mirrors it into the display.
    pub fn append_input(&mut self, text: &str) -> CalcResult<()> {
        if let Err(err) = self.input.append(text) {
            warn!(
                error = %err,
                fragment = text,
                len = self.input.len(),
                "input rejected"
            );
            return Err(err);
        }
        self.display = self.input.as_str().to_owned();
        Ok(())
    }

    /// `=`: evaluate, show, record, and continue from the result.
    fn commit_evaluation(&mut self) {
        let expression = self.input.display_text().to_owned();
        let outcome = match self.evaluator.policy().errors {
            ErrorPolicy::Lenient => Ok(self.evaluator.evaluate(self.input.as_str())),
            ErrorPolicy::Strict => self.evaluator.try_evaluate(self.input.as_str()),
        };

        let value = match outcome {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, input = %expression, "evaluation failed");
                self.display = ERROR_DISPLAY.to_owned();
                return;
            }
        };

        self.display = format_display(value);
        let recorded = self.history.record(expression.as_str(), self.display.as_str());
        debug!(
            input = %expression,
            result = %self.display,
            recorded,
            "expression evaluated"
        );
        if let Err(err) = self.input.replace(&self.display) {
            warn!(error = %err, "result does not fit the input buffer, clearing it");
            self.input.clear();
        }
    }

    /// `GRAPH`: switch to graphing mode and sample the current input.
    fn plot_input(&mut self) {
        if self.mode != CalculatorMode::Graphing {
            debug!(from = self.mode.name(), "entering graphing mode");
        }
        self.mode = CalculatorMode::Graphing;
        self.graph = self.sampler.sample(self.input.as_str());
    }
}
