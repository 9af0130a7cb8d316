use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for parameter '{field}': {reason}")]
    InvalidParameterError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parameter,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ProfileError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProfileError::InvalidParameterError { .. } => ErrorCategory::Parameter,
            ProfileError::ConfigError { .. } => ErrorCategory::Configuration,
            ProfileError::IoError(_)
            | ProfileError::SerializationError(_)
            | ProfileError::TomlSerializeError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ProfileError::InvalidParameterError { .. } | ProfileError::ConfigError { .. } => {
                ErrorSeverity::High
            }
            ProfileError::IoError(_) => ErrorSeverity::Medium,
            ProfileError::SerializationError(_) | ProfileError::TomlSerializeError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// 根據嚴重程度決定程式結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProfileError::InvalidParameterError { field, value, .. } => {
                format!("Parameter '{}' does not accept '{}'", field, value)
            }
            ProfileError::ConfigError { message } => {
                format!("Could not load profile configuration: {}", message)
            }
            ProfileError::IoError(e) => format!("Could not write output: {}", e),
            ProfileError::SerializationError(_) | ProfileError::TomlSerializeError(_) => {
                "Could not render the topology description".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ProfileError::InvalidParameterError { reason, .. } => reason.clone(),
            ProfileError::ConfigError { .. } => {
                "Check that the file exists and is valid TOML".to_string()
            }
            ProfileError::IoError(_) => {
                "Check that the output path is writable".to_string()
            }
            ProfileError::SerializationError(_) | ProfileError::TomlSerializeError(_) => {
                "Try another --format".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
