use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("Allocation of {capacity} elements failed: {reason}")]
    AllocationError { capacity: usize, reason: String },

    #[error("Invalid state: {operation} called after release")]
    InvalidStateError { operation: String },

    #[error("Index {index} out of range for capacity {capacity}")]
    IndexOutOfRangeError { index: usize, capacity: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, KitError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Resource,
    Usage,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KitError {
    pub fn invalid_state(operation: &str) -> Self {
        KitError::InvalidStateError {
            operation: operation.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            KitError::AllocationError { .. } => ErrorCategory::Resource,
            KitError::InvalidStateError { .. } | KitError::IndexOutOfRangeError { .. } => {
                ErrorCategory::Usage
            }
            KitError::IoError(_) | KitError::SerializationError(_) => ErrorCategory::Io,
            KitError::ConfigError { .. }
            | KitError::ConfigValidationError { .. }
            | KitError::InvalidConfigValueError { .. }
            | KitError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Usage | ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Resource => ErrorSeverity::Critical,
        }
    }

    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KitError::AllocationError { .. } => "Request a smaller capacity or free memory",
            KitError::InvalidStateError { .. } => {
                "Do not use a resource after release(); duplicate it first if you need a copy"
            }
            KitError::IndexOutOfRangeError { .. } => "Keep indices within [0, capacity)",
            KitError::IoError(_) => "Check that the path exists and is accessible",
            KitError::SerializationError(_) => "Check the data being serialized",
            KitError::ConfigError { .. } | KitError::MissingConfigError { .. } => {
                "Check the scenario file and the environment variables it references"
            }
            KitError::ConfigValidationError { .. } | KitError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the scenario file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Resource => format!("Could not acquire resource: {}", self),
            ErrorCategory::Usage => format!("Resource misuse: {}", self),
            ErrorCategory::Io => format!("File problem: {}", self),
            ErrorCategory::Configuration => format!("Bad configuration: {}", self),
        }
    }
}
