use crate::domain::model::{TaxInput, TaxedAmount};
use crate::domain::ports::{Exercise, InputSource};
use crate::utils::error::Result;

pub const AMOUNT_PROMPT: &str = "Enter amount: ";
pub const DEFAULT_TAX_RATE: f64 = 5.0;

pub fn add_tax(amount: f64, rate: f64) -> f64 {
    amount * (1.0 + rate / 100.0)
}

pub struct TaxExercise {
    rate: f64,
}

impl TaxExercise {
    /// `rate` is a percentage, e.g. `5.0` for 5%.
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl Default for TaxExercise {
    fn default() -> Self {
        Self::new(DEFAULT_TAX_RATE)
    }
}

impl Exercise for TaxExercise {
    type Input = TaxInput;
    type Output = TaxedAmount;

    fn name(&self) -> &'static str {
        "tax"
    }

    fn read(&self, source: &mut dyn InputSource) -> Result<TaxInput> {
        let amount = source.read_f64(AMOUNT_PROMPT)?;
        Ok(TaxInput {
            amount,
            rate: self.rate,
        })
    }

    fn evaluate(&self, input: TaxInput) -> TaxedAmount {
        TaxedAmount {
            amount: input.amount,
            rate: input.rate,
            with_tax: add_tax(input.amount, input.rate),
        }
    }

    fn render(&self, output: &TaxedAmount) -> String {
        format!(
            "Amount with {:.2}% tax: {:.2}\n",
            output.rate, output.with_tax
        )
    }
}
