use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: String },

    #[error("Could not parse '{token}' as {expected}")]
    ParseError { token: String, expected: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl QuizError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuizError::UnexpectedEof { .. } | QuizError::ParseError { .. } => ErrorCategory::Input,
            QuizError::ConfigError { .. }
            | QuizError::ConfigValidationError { .. }
            | QuizError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            QuizError::IoError(_) | QuizError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 對應嚴重程度的退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuizError::UnexpectedEof { expected } => {
                format!("Input ended before {} was entered", expected)
            }
            QuizError::ParseError { token, expected } => {
                format!("'{}' is not a valid {}", token, expected)
            }
            QuizError::ConfigError { message } => format!("Configuration problem: {}", message),
            QuizError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            QuizError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not allowed for '{}' ({})", value, field, reason)
            }
            QuizError::IoError(e) => format!("Could not read or write the terminal: {}", e),
            QuizError::SerializationError(e) => format!("Could not encode the result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QuizError::UnexpectedEof { .. } => "Provide every value the exercise asks for",
            QuizError::ParseError { .. } => "Enter plain numbers such as 3, -2 or 4.5",
            QuizError::ConfigError { .. } | QuizError::ConfigValidationError { .. } => {
                "Check the TOML file syntax and section names"
            }
            QuizError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the config file or command line"
            }
            QuizError::IoError(_) => "Make sure stdin and stdout are available",
            QuizError::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
