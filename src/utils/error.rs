use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unable to connect to {url}: {source}")]
    ConnectionError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

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

    #[error("Environment '{name}' is not configured")]
    EnvironmentNotFoundError { name: String },

    #[error("No access token available for environment '{environment}'")]
    MissingTokenError { environment: String },

    #[error("Error calling '{operation}': {status}")]
    UnexpectedStatusError { operation: String, status: u16 },

    #[error("Incorrect password")]
    InvalidCredentialsError,

    #[error("Invalid response from server: {message}")]
    InvalidResponseError { message: String },

    #[error("Application archive not found: {path}")]
    ArchiveNotFoundError { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Server,
    Authentication,
    Configuration,
    Data,
    FileSystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CliError {
    pub fn config(message: impl Into<String>) -> Self {
        CliError::ConfigError {
            message: message.into(),
        }
    }

    pub fn unexpected_status(operation: &str, status: reqwest::StatusCode) -> Self {
        CliError::UnexpectedStatusError {
            operation: operation.to_string(),
            status: status.as_u16(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CliError::ConnectionError { .. } | CliError::ApiError(_) => ErrorCategory::Network,
            CliError::UnexpectedStatusError { .. } => ErrorCategory::Server,
            CliError::InvalidCredentialsError | CliError::MissingTokenError { .. } => {
                ErrorCategory::Authentication
            }
            CliError::TomlError(_)
            | CliError::ConfigError { .. }
            | CliError::ConfigValidationError { .. }
            | CliError::InvalidConfigValueError { .. }
            | CliError::EnvironmentNotFoundError { .. } => ErrorCategory::Configuration,
            CliError::SerializationError(_)
            | CliError::CsvError(_)
            | CliError::InvalidResponseError { .. } => ErrorCategory::Data,
            CliError::IoError(_) | CliError::ZipError(_) | CliError::ArchiveNotFoundError { .. } => {
                ErrorCategory::FileSystem
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Server => ErrorSeverity::Medium,
            ErrorCategory::Authentication | ErrorCategory::Configuration | ErrorCategory::Data => {
                ErrorSeverity::High
            }
            ErrorCategory::FileSystem => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CliError::ConnectionError { url, .. } => format!("Unable to connect to {}", url),
            CliError::UnexpectedStatusError { operation, status } => {
                format!("Error calling '{}': server responded with {}", operation, status)
            }
            CliError::EnvironmentNotFoundError { name } => {
                format!("Environment '{}' was not found in the configuration", name)
            }
            CliError::InvalidResponseError { .. } | CliError::SerializationError(_) => {
                "The server returned a response that could not be understood".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CliError::ConnectionError { .. } | CliError::ApiError(_) => {
                "Check that the environment endpoint is reachable, or pass --insecure for self-signed certificates"
            }
            CliError::UnexpectedStatusError { .. } => {
                "Run again with --verbose to see the request and response details"
            }
            CliError::InvalidCredentialsError | CliError::MissingTokenError { .. } => {
                "Provide a valid access token with --token, APIMCTL_ACCESS_TOKEN or access_token in the config file"
            }
            CliError::EnvironmentNotFoundError { .. } => {
                "Add the environment under [environments] in the config file"
            }
            CliError::TomlError(_)
            | CliError::ConfigError { .. }
            | CliError::ConfigValidationError { .. }
            | CliError::InvalidConfigValueError { .. } => "Check the config file passed with --config",
            CliError::ArchiveNotFoundError { .. } => {
                "Relative paths are resolved against the export directory, e.g. dev/admin_SampleApp.zip"
            }
            CliError::SerializationError(_)
            | CliError::CsvError(_)
            | CliError::InvalidResponseError { .. } => {
                "Verify that the endpoint points at a compatible store API version"
            }
            CliError::IoError(_) | CliError::ZipError(_) => {
                "Check file permissions and free space in the export directory"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
