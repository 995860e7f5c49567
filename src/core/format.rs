use crate::domain::ports::Exercise;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `<x> <symbol> <y> is <result>`
pub fn format_equation(x: f64, symbol: char, y: f64, result: f64) -> String {
    format!("{} {} {} is {}", x, symbol, y, result)
}

pub fn render_output<E: Exercise>(
    exercise: &E,
    output: &E::Output,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(exercise.render(output)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(output)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_equation() {
        assert_eq!(format_equation(2.0, '+', 3.0, 5.0), "2 + 3 is 5");
        assert_eq!(format_equation(1.5, '*', -2.0, -3.0), "1.5 * -2 is -3");
        assert_eq!(format_equation(1.0, '/', 0.0, f64::INFINITY), "1 / 0 is inf");
        assert_eq!(format_equation(4.0, '%', 2.0, 0.0), "4 % 2 is 0");
    }
}
