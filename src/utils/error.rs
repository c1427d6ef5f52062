use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Unknown workout type: {code}")]
    UnknownWorkoutType { code: String },

    #[error("Wrong field count for {code}: expected {expected}, got {actual}")]
    ArityMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid sample: {message}")]
    InvalidSample { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Packages file error: {0}")]
    PackagesFileError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrackerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownWorkoutType { .. }
            | Self::ArityMismatch { .. }
            | Self::InvalidSample { .. } => ErrorCategory::Input,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::PackagesFileError(_) => ErrorCategory::Config,
            Self::ProcessingError { .. } | Self::SerializationError(_) => {
                ErrorCategory::Processing
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Unknown codes are skipped per sample, the batch keeps going.
            Self::UnknownWorkoutType { .. } => ErrorSeverity::Low,
            Self::ArityMismatch { .. } | Self::InvalidSample { .. } => ErrorSeverity::Medium,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::PackagesFileError(_) => ErrorSeverity::Medium,
            Self::ProcessingError { .. } | Self::SerializationError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::UnknownWorkoutType { .. } => {
                "Use one of the supported workout codes: RUN, WLK, SWM".to_string()
            }
            Self::ArityMismatch { code, expected, .. } => {
                format!("Supply exactly {} numeric fields for {}", expected, code)
            }
            Self::InvalidSample { .. } => {
                "Check that duration is positive and all fields are non-negative numbers"
                    .to_string()
            }
            Self::PackagesFileError(_) | Self::ConfigError { .. } => {
                "Check the packages file syntax against the documented format".to_string()
            }
            Self::InvalidConfigValueError { field, .. } | Self::MissingConfigError { field } => {
                format!("Review the '{}' setting", field)
            }
            Self::ProcessingError { .. } | Self::SerializationError(_) => {
                "Re-run with --verbose to see the failing stage".to_string()
            }
            Self::IoError(_) => {
                "Check file permissions and that the output path exists".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UnknownWorkoutType { code } => {
                format!("Workout type '{}' is not recognized", code)
            }
            Self::ArityMismatch {
                code,
                expected,
                actual,
            } => format!(
                "A {} package needs {} fields but {} were supplied",
                code, expected, actual
            ),
            Self::InvalidSample { message } => format!("Sensor data is invalid: {}", message),
            Self::IoError(e) => format!("File operation failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
