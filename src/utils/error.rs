use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Invalid command '{input}': {reason}")]
    CommandError { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::ConfigError { .. }
            | CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CalcError::CommandError { .. } => ErrorCategory::Input,
            CalcError::SerializationError(_) | CalcError::CsvError(_) => ErrorCategory::Output,
            CalcError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // a bad command only affects one line of an interactive session
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::ConfigError { .. } | CalcError::ConfigValidationError { .. } => {
                "Check that the configuration file is valid TOML".to_string()
            }
            CalcError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration file", field)
            }
            CalcError::CommandError { .. } => "Type 'help' to list the available commands".to_string(),
            CalcError::SerializationError(_) | CalcError::CsvError(_) => {
                "Try a different output format (--format text)".to_string()
            }
            CalcError::IoError(_) => "Check file paths and permissions".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => self.to_string(),
            ErrorCategory::Output => format!("Could not render the report: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
