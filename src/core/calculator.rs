use crate::domain::model::{Evaluation, Operator};

/// Applies the operator named by `symbol` to `x` and `y`.
///
/// Symbols outside `+ - * /` produce [`Evaluation::InvalidOperator`], whose
/// numeric value is the `0.0` sentinel.
pub fn calculate_result(x: f64, y: f64, symbol: char) -> Evaluation {
    match Operator::from_symbol(symbol) {
        Some(op) => Evaluation::Value {
            result: op.apply(x, y),
        },
        None => {
            tracing::warn!("⚠️ Unrecognised operator {:?}", symbol);
            Evaluation::InvalidOperator { symbol }
        }
    }
}
