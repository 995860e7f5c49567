use crate::core::calculator::calculate_result;
use crate::core::format::format_equation;
use crate::domain::model::{Calculation, CalculatorInput};
use crate::domain::ports::{Exercise, InputSource};
use crate::utils::error::Result;

pub const OPERAND_PROMPT: &str = "Enter a double: ";
pub const SYMBOL_PROMPT: &str = "Enter a symbol (+, -, *, or /): ";
pub const DEFAULT_INVALID_MESSAGE: &str = "Invalid input!";

/// Reads two operands and an operator symbol, then prints `<x> <symbol> <y> is <result>`.
pub struct CalculatorExercise {
    invalid_message: String,
}

impl CalculatorExercise {
    pub fn new(invalid_message: impl Into<String>) -> Self {
        Self {
            invalid_message: invalid_message.into(),
        }
    }
}

impl Default for CalculatorExercise {
    fn default() -> Self {
        Self::new(DEFAULT_INVALID_MESSAGE)
    }
}

impl Exercise for CalculatorExercise {
    type Input = CalculatorInput;
    type Output = Calculation;

    fn name(&self) -> &'static str {
        "calc"
    }

    fn read(&self, source: &mut dyn InputSource) -> Result<CalculatorInput> {
        let x = source.read_f64(OPERAND_PROMPT)?;
        let y = source.read_f64(OPERAND_PROMPT)?;
        let symbol = source.read_symbol(SYMBOL_PROMPT)?;
        Ok(CalculatorInput { x, y, symbol })
    }

    fn evaluate(&self, input: CalculatorInput) -> Calculation {
        let evaluation = calculate_result(input.x, input.y, input.symbol);
        let diagnostic = evaluation
            .is_invalid()
            .then(|| self.invalid_message.clone());

        Calculation {
            x: input.x,
            symbol: input.symbol,
            y: input.y,
            evaluation,
            diagnostic,
        }
    }

    fn render(&self, output: &Calculation) -> String {
        let line = format_equation(output.x, output.symbol, output.y, output.evaluation.value());
        match &output.diagnostic {
            Some(message) => format!("{}\n{}\n", message, line),
            None => format!("{}\n", line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Evaluation;

    #[test]
    fn test_render_valid_result() {
        let exercise = CalculatorExercise::default();
        let output = exercise.evaluate(CalculatorInput {
            x: 2.0,
            y: 3.0,
            symbol: '+',
        });
        assert_eq!(output.evaluation, Evaluation::Value { result: 5.0 });
        assert_eq!(output.diagnostic, None);
        assert_eq!(exercise.render(&output), "2 + 3 is 5\n");
    }

    #[test]
    fn test_render_invalid_operator_prints_diagnostic_and_sentinel() {
        let exercise = CalculatorExercise::default();
        let output = exercise.evaluate(CalculatorInput {
            x: 4.0,
            y: 2.0,
            symbol: '%',
        });
        assert_eq!(output.diagnostic.as_deref(), Some("Invalid input!"));
        assert_eq!(exercise.render(&output), "Invalid input!\n4 % 2 is 0\n");
    }

    #[test]
    fn test_custom_invalid_message() {
        let exercise = CalculatorExercise::new("Unknown operator");
        let output = exercise.evaluate(CalculatorInput {
            x: 1.0,
            y: 1.0,
            symbol: '?',
        });
        assert!(exercise.render(&output).starts_with("Unknown operator\n"));
    }
}
