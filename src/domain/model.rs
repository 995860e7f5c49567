use serde::{Serialize, Serializer};

/// 無法辨識運算子時回傳的佔位結果
pub const SENTINEL_RESULT: f64 = 0.0;

/// JSON has no inf/NaN: write them as `"inf"`, `"-inf"` and `"NaN"`, the same
/// spelling the text output uses.
pub fn serialize_ieee<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Division is not guarded: a zero divisor yields `inf` or `NaN`.
    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            Operator::Add => x + y,
            Operator::Subtract => x - y,
            Operator::Multiply => x * y,
            Operator::Divide => x / y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evaluation {
    Value {
        #[serde(serialize_with = "serialize_ieee")]
        result: f64,
    },
    InvalidOperator { symbol: char },
}

impl Evaluation {
    /// The numeric result, or [`SENTINEL_RESULT`] for an unrecognised operator.
    pub fn value(&self) -> f64 {
        match self {
            Evaluation::Value { result } => *result,
            Evaluation::InvalidOperator { .. } => SENTINEL_RESULT,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Evaluation::InvalidOperator { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorInput {
    pub x: f64,
    pub y: f64,
    pub symbol: char,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    #[serde(serialize_with = "serialize_ieee")]
    pub x: f64,
    pub symbol: char,
    #[serde(serialize_with = "serialize_ieee")]
    pub y: f64,
    pub evaluation: Evaluation,
    /// Message shown for an unrecognised operator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SphereInput {
    pub radius: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SphereVolume {
    pub radius: i64,
    pub volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxInput {
    pub amount: f64,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxedAmount {
    pub amount: f64,
    pub rate: f64,
    pub with_tax: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallDropInput {
    pub tower_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallSample {
    pub second: u32,
    /// `None` once the ball has reached the ground.
    pub height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallDropReport {
    pub tower_height: f64,
    pub samples: Vec<BallSample>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_mapping_is_closed() {
        for symbol in ['+', '-', '*', '/'] {
            let op = Operator::from_symbol(symbol).unwrap();
            assert_eq!(op.symbol(), symbol);
        }
        for symbol in ['%', '^', 'x', ' ', '='] {
            assert!(Operator::from_symbol(symbol).is_none());
        }
    }

    #[test]
    fn test_invalid_operator_value_is_sentinel() {
        let eval = Evaluation::InvalidOperator { symbol: '%' };
        assert!(eval.is_invalid());
        assert_eq!(eval.value(), SENTINEL_RESULT);
    }

    #[test]
    fn test_non_finite_values_serialize_as_strings() {
        let json = |result: f64| {
            serde_json::to_value(Evaluation::Value { result }).unwrap()["result"].clone()
        };
        assert_eq!(json(2.5), 2.5);
        assert_eq!(json(f64::INFINITY), "inf");
        assert_eq!(json(f64::NEG_INFINITY), "-inf");
        assert_eq!(json(f64::NAN), "NaN");
    }

    #[test]
    fn test_divide_by_zero_follows_ieee() {
        assert_eq!(Operator::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }
}
