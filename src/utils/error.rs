use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExerciseError {
    #[error("Invalid choice! Expected 1-4, got {choice}")]
    InvalidChoice { choice: i64 },

    #[error("Division by zero!")]
    DivisionByZero,

    #[error("Error - precision must be a non-negative number! (got {precision})")]
    NegativePrecision { precision: i64 },

    #[error("Invalid input for {expected}: '{token}'")]
    InvalidInput { expected: String, token: String },

    #[error("Unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: String },

    #[error("Function init has already been called")]
    AlreadyInitialized,

    #[error("Attacker used before init was called")]
    NotInitialized,

    #[error(
        "Given password must be of the same size as password of the vault ({expected}), but was: {actual}"
    )]
    SizeMismatch { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    State,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ExerciseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidChoice { .. }
            | Self::DivisionByZero
            | Self::NegativePrecision { .. }
            | Self::InvalidInput { .. }
            | Self::UnexpectedEof { .. }
            | Self::SizeMismatch { .. } => ErrorCategory::Input,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Config,
            Self::AlreadyInitialized | Self::NotInitialized => ErrorCategory::State,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 重複 init 只是警告，狀態不變
            Self::AlreadyInitialized => ErrorSeverity::Low,
            Self::InvalidChoice { .. }
            | Self::DivisionByZero
            | Self::NegativePrecision { .. }
            | Self::InvalidInput { .. }
            | Self::SizeMismatch { .. } => ErrorSeverity::Medium,
            Self::UnexpectedEof { .. }
            | Self::NotInitialized
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidChoice { .. } => "Pick an operation between 1 and 4".to_string(),
            Self::DivisionByZero => "Use a non-zero divisor".to_string(),
            Self::NegativePrecision { .. } => {
                "Enter zero or a positive number of decimal places".to_string()
            }
            Self::InvalidInput { expected, .. } => format!("Enter a valid {}", expected),
            Self::UnexpectedEof { .. } => "Provide all values the prompt asks for".to_string(),
            Self::AlreadyInitialized => "Create a new attacker to use another vault".to_string(),
            Self::NotInitialized => "Call init before breaking the password".to_string(),
            Self::SizeMismatch { expected, .. } => {
                format!("Use a guess of exactly {} characters", expected)
            }
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' entry in the configuration file", field)
            }
            Self::MissingConfigError { field } => {
                format!("Add the '{}' entry to the configuration file", field)
            }
            Self::IoError(_) => "Check file paths and permissions".to_string(),
            Self::SerializationError(_) => "Report this as a bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => self.to_string(),
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::State => format!("Usage problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    /// 依嚴重程度決定程式結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExerciseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_message() {
        let err = ExerciseError::SizeMismatch {
            expected: 4,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Given password must be of the same size as password of the vault (4), but was: 2"
        );
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        assert_eq!(ExerciseError::AlreadyInitialized.exit_code(), 0);
        assert_eq!(ExerciseError::DivisionByZero.exit_code(), 2);
        assert_eq!(ExerciseError::NotInitialized.exit_code(), 1);
        let io = ExerciseError::from(std::io::Error::other("boom"));
        assert_eq!(io.exit_code(), 3);
    }
}
