use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing failed: {0}")]
    Feed(#[from] rss::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Query failed with status {status}: {message}")]
    Query { status: u16, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::Http(_) | SiteError::Query { .. } => ErrorCategory::Network,
            SiteError::Feed(_) | SiteError::Serialization(_) => ErrorCategory::Data,
            SiteError::Io(_) => ErrorCategory::System,
            SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::Http(_) => {
                "Check network connectivity and that the remote endpoint is reachable".to_string()
            }
            SiteError::Query { status, .. } if *status == 401 || *status == 403 => {
                "Check that SUPABASE_ANON_KEY is valid for this project".to_string()
            }
            SiteError::Query { .. } => {
                "Check that the events table exists and the query parameters are valid".to_string()
            }
            SiteError::Feed(_) => "Check that the feed URL serves a valid RSS document".to_string(),
            SiteError::Serialization(_) => {
                "Check that the remote rows match the expected events columns".to_string()
            }
            SiteError::Io(_) => "Check file paths and permissions".to_string(),
            SiteError::InvalidConfigValueError { field, .. }
            | SiteError::ConfigValidationError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
            SiteError::ConfigError { .. } => "Review the configuration file".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the remote service: {}", self),
            ErrorCategory::Data => format!("Received data could not be read: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_category_and_suggestion() {
        let err = SiteError::Query {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.recovery_suggestion().contains("SUPABASE_ANON_KEY"));
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_config_error_message() {
        let err = SiteError::InvalidConfigValueError {
            field: "feed.url".to_string(),
            value: "ftp://example.com".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().starts_with("Configuration problem"));
        assert!(err.recovery_suggestion().contains("feed.url"));
    }
}
