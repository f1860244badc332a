use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("Catalog request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog resource '{resource}' returned status {status}")]
    CatalogStatusError { resource: String, status: u16 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    CatalogLoad,
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

impl EstimatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EstimatorError::HttpError(_)
            | EstimatorError::SerializationError(_)
            | EstimatorError::CatalogStatusError { .. } => ErrorCategory::CatalogLoad,
            EstimatorError::IoError(_) => ErrorCategory::Output,
            EstimatorError::ConfigError { .. }
            | EstimatorError::ConfigValidationError { .. }
            | EstimatorError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // the server may come back; everything else needs a change on our side
            EstimatorError::HttpError(_) | EstimatorError::CatalogStatusError { .. } => {
                ErrorSeverity::Medium
            }
            EstimatorError::SerializationError(_) | EstimatorError::IoError(_) => {
                ErrorSeverity::High
            }
            _ => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EstimatorError::HttpError(_) => "Check the catalog URL and network connectivity",
            EstimatorError::CatalogStatusError { .. } => {
                "Make sure breeds.json and addons.json are published at the catalog location"
            }
            EstimatorError::SerializationError(_) => {
                "Catalog files must be JSON arrays of {breed, prices} / {addon, prices} objects"
            }
            EstimatorError::IoError(_) => "Check that the catalog directory and output path exist",
            _ => "Review the command line flags and the TOML configuration file",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::CatalogLoad => format!("Could not load the price catalog: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Output => format!("File access failed: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, EstimatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_is_retryable_load_failure() {
        let err = EstimatorError::CatalogStatusError {
            resource: "breeds.json".to_string(),
            status: 503,
        };
        assert_eq!(err.category(), ErrorCategory::CatalogLoad);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = EstimatorError::InvalidConfigValueError {
            field: "catalog.location".to_string(),
            value: "https://".to_string(),
            reason: "Invalid URL format: empty host".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_malformed_json_maps_to_catalog_load() {
        let parse_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = EstimatorError::from(parse_err);
        assert_eq!(err.category(), ErrorCategory::CatalogLoad);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
