use thiserror::Error;

#[derive(Error, Debug)]
pub enum AreaError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Batch input error: {message}")]
    BatchInputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AreaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AreaError::ConfigValidationError { .. }
            | AreaError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AreaError::CsvError(_) | AreaError::BatchInputError { .. } => ErrorCategory::Input,
            AreaError::IoError(_) | AreaError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AreaError::ConfigValidationError { .. } => {
                "Check the TOML syntax and section names of the configuration file"
            }
            AreaError::InvalidConfigValueError { .. } => {
                "Fix the reported value; region codes are two letters, postal ranges four digits"
            }
            AreaError::CsvError(_) => "Make sure the input is valid CSV with a header row",
            AreaError::BatchInputError { .. } => {
                "Check the column names passed with --id-column and --areas-column"
            }
            AreaError::IoError(_) => "Check that the path exists and is readable/writable",
            AreaError::SerializationError(_) => "Report this as a bug",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Could not read input: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AreaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = AreaError::InvalidConfigValueError {
            field: "regions.code".to_string(),
            value: "ZHR".to_string(),
            reason: "Region code must be exactly two ASCII letters".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("ZHR"));
    }

    #[test]
    fn test_batch_input_errors_are_medium_severity() {
        let err = AreaError::BatchInputError {
            message: "column 'areas' not found".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err: AreaError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
