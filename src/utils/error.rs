use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Backend returned {status}: {detail}")]
    BackendError { status: u16, detail: String },

    #[error("Authentication error: {message}")]
    AuthError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, PortalError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Backend,
    Auth,
    Config,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortalError::ApiError(_) => ErrorCategory::Network,
            PortalError::BackendError { .. } => ErrorCategory::Backend,
            PortalError::AuthError { .. } => ErrorCategory::Auth,
            PortalError::IoError(_) => ErrorCategory::System,
            PortalError::SerializationError(_) => ErrorCategory::Data,
            PortalError::ConfigError { .. }
            | PortalError::InvalidConfigValueError { .. }
            | PortalError::ValidationError { .. } => ErrorCategory::Config,
            PortalError::ProcessingError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortalError::ApiError(_) => ErrorSeverity::Medium,
            PortalError::BackendError { status, .. } if *status >= 500 => ErrorSeverity::High,
            PortalError::BackendError { .. } => ErrorSeverity::Medium,
            PortalError::AuthError { .. } => ErrorSeverity::Medium,
            PortalError::IoError(_) => ErrorSeverity::Critical,
            PortalError::SerializationError(_) => ErrorSeverity::High,
            PortalError::ConfigError { .. }
            | PortalError::InvalidConfigValueError { .. }
            | PortalError::ValidationError { .. } => ErrorSeverity::High,
            PortalError::ProcessingError { .. } => ErrorSeverity::High,
        }
    }

    /// Process exit code for a failed command. Always nonzero: every
    /// error printed as a failure must also fail the process.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the backend is running and --base-url is reachable"
            }
            ErrorCategory::Backend => {
                "Inspect the backend detail message; the request itself was delivered"
            }
            ErrorCategory::Auth => "Run 'campus-portal login' again to obtain a fresh token",
            ErrorCategory::Config => "Fix the flagged configuration value and re-run",
            ErrorCategory::Data => {
                "The response did not match the expected shape; check the backend version"
            }
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortalError::ApiError(e) => format!("Could not reach the backend: {}", e),
            PortalError::BackendError { status, detail } => {
                format!("The backend rejected the request ({}): {}", status, detail)
            }
            PortalError::AuthError { message } => format!("Not authenticated: {}", message),
            other => other.to_string(),
        }
    }
}
