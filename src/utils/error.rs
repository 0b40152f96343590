use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkloadError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WorkloadError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WorkloadError::IoError(_) => ErrorCategory::Output,
            WorkloadError::SerializationError(_) => ErrorCategory::Serialization,
            WorkloadError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // The report is a diagnostic; the workload itself already ran.
            WorkloadError::SerializationError(_) => ErrorSeverity::Low,
            WorkloadError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            WorkloadError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            WorkloadError::IoError(_) => {
                "Check that standard output is still attached (closed pipe or full disk)".to_string()
            }
            WorkloadError::SerializationError(_) => {
                "The run report could not be encoded; rerun with RUST_LOG=debug".to_string()
            }
            WorkloadError::InvalidConfigValueError { field, .. } => {
                format!("Fix or unset {}", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WorkloadError::IoError(e) => format!("Could not write workload output: {}", e),
            WorkloadError::SerializationError(e) => format!("Could not encode run report: {}", e),
            WorkloadError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Configuration {}='{}' is invalid: {}", field, value, reason),
        }
    }

    /// Process exit code for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkloadError>;
