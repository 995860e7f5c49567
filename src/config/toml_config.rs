use crate::app::exercises::{ball_drop, calculator, tax};
use crate::utils::error::{QuizError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_positive, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_BALL_DROP_SECONDS: u32 = 600;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub calculator: Option<CalculatorConfig>,
    pub sphere: Option<SphereConfig>,
    pub tax: Option<TaxConfig>,
    pub ball_drop: Option<BallDropConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub invalid_message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SphereConfig {
    pub radius: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxConfig {
    pub rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BallDropConfig {
    pub gravity: Option<f64>,
    pub seconds: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuizError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QuizError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TAX_RATE})，找不到的變數原樣保留
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QuizError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn invalid_message(&self) -> &str {
        self.calculator
            .as_ref()
            .and_then(|c| c.invalid_message.as_deref())
            .unwrap_or(calculator::DEFAULT_INVALID_MESSAGE)
    }

    pub fn sphere_radius(&self) -> Option<i64> {
        self.sphere.as_ref().and_then(|s| s.radius)
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax
            .as_ref()
            .and_then(|t| t.rate)
            .unwrap_or(tax::DEFAULT_TAX_RATE)
    }

    pub fn gravity(&self) -> f64 {
        self.ball_drop
            .as_ref()
            .and_then(|b| b.gravity)
            .unwrap_or(ball_drop::DEFAULT_GRAVITY)
    }

    pub fn ball_drop_seconds(&self) -> u32 {
        self.ball_drop
            .as_ref()
            .and_then(|b| b.seconds)
            .unwrap_or(ball_drop::DEFAULT_SECONDS)
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("calculator.invalid_message", self.invalid_message())?;
        validate_finite("tax.rate", self.tax_rate())?;
        validate_positive("ball_drop.gravity", self.gravity())?;
        validate_range(
            "ball_drop.seconds",
            self.ball_drop_seconds(),
            0,
            MAX_BALL_DROP_SECONDS,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.invalid_message(), "Invalid input!");
        assert_eq!(config.tax_rate(), 5.0);
        assert_eq!(config.gravity(), 9.8);
        assert_eq!(config.ball_drop_seconds(), 5);
        assert_eq!(config.sphere_radius(), None);
        assert!(!config.json_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_override_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[calculator]
invalid_message = "Bad operator"

[sphere]
radius = 4

[tax]
rate = 8.25

[ball_drop]
gravity = 1.62
seconds = 10

[logging]
json = true
"#,
        )
        .unwrap();

        assert_eq!(config.invalid_message(), "Bad operator");
        assert_eq!(config.sphere_radius(), Some(4));
        assert_eq!(config.tax_rate(), 8.25);
        assert_eq!(config.gravity(), 1.62);
        assert_eq!(config.ball_drop_seconds(), 10);
        assert!(config.json_logging());
    }

    #[test]
    fn test_unknown_env_var_is_left_in_place() {
        let content = "[calculator]\ninvalid_message = \"${TEXTBOOK_EXERCISES_SURELY_UNSET}\"\n";
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(
            config.invalid_message(),
            "${TEXTBOOK_EXERCISES_SURELY_UNSET}"
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let zero_gravity = TomlConfig::from_toml_str("[ball_drop]\ngravity = 0.0\n").unwrap();
        assert!(zero_gravity.validate().is_err());

        let too_long = TomlConfig::from_toml_str("[ball_drop]\nseconds = 601\n").unwrap();
        assert!(too_long.validate().is_err());

        let blank = TomlConfig::from_toml_str("[calculator]\ninvalid_message = \"  \"\n").unwrap();
        assert!(blank.validate().is_err());

        let nan = TomlConfig::from_toml_str("[tax]\nrate = nan\n").unwrap();
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[tax\nrate = 5").unwrap_err();
        assert!(matches!(err, QuizError::ConfigValidationError { .. }));
    }
}
