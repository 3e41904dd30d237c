use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Parse error on line {line_number}: {reason} (line was {line:?})")]
    ParseError {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Processing,
}

impl CourseError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IoError(_) => ErrorSeverity::Critical,
            Self::SerializationError(_) => ErrorSeverity::High,
            Self::ParseError { .. } => ErrorSeverity::High,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::ProcessingError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::ParseError { .. } => ErrorCategory::Input,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => ErrorCategory::Config,
            Self::SerializationError(_) | Self::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read the course input: {}", e),
            Self::SerializationError(e) => format!("Could not render the report: {}", e),
            Self::ParseError {
                line_number, line, ..
            } => format!("Line {} is not a valid command: {:?}", line_number, line),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, value, .. } => {
                format!("Invalid value {:?} for --{}", value, field)
            }
            Self::ProcessingError { message } => format!("Processing failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => {
                "Check that the input file exists and is readable, or pipe data on stdin".to_string()
            }
            Self::SerializationError(_) => "Try --format plain".to_string(),
            Self::ParseError { .. } => {
                "Fix the offending line, or rerun with --on-parse-error zero|skip".to_string()
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Run with --help to see accepted values".to_string()
            }
            Self::ProcessingError { .. } => "Rerun with --verbose for details".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CourseError>;
