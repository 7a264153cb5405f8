use thiserror::Error;

/// 所有無效輸入共用的訊息前綴
pub const INVALID_INPUT_MESSAGE: &str = "Input parameters are set incorrectly!";

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Input parameters are set incorrectly! ({reason})")]
    InvalidInput { reason: String },

    #[error("Arithmetic error: {message}")]
    Arithmetic { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

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
    Arithmetic,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl CalcError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn arithmetic(message: impl Into<String>) -> Self {
        CalcError::Arithmetic {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidInput { .. } => ErrorCategory::Input,
            CalcError::Arithmetic { .. } => ErrorCategory::Arithmetic,
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Arithmetic | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => {
                "Use two numbers of the same kind (1..10 or I..X) joined by one of + - * /, e.g. \"3 * 4\" or \"IV + V\""
            }
            CalcError::Arithmetic { .. } => "Check the divisor and the size of the operands",
            CalcError::IoError(_) => "Make sure standard input or the config file is readable",
            CalcError::SerializationError(_) => "Retry with --format plain",
            CalcError::ConfigError { .. } | CalcError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the command-line flags"
            }
        }
    }

    /// 給終端使用者看的訊息，無效輸入維持原本固定的文字
    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidInput { .. } => INVALID_INPUT_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
