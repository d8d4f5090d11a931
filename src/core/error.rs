//! Custom error types for dashcheck
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for dashcheck operations
#[derive(Error, Debug)]
pub enum CheckError {
    /// Navigation or connectivity errors against the dashboard
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Element lookup failures (role/name queries)
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Visibility assertion timed out
    #[error("Visibility wait timed out: {0}")]
    WaitTimeout(String),

    /// Screenshot capture or write failures
    #[error("Screenshot error: {0}")]
    Screenshot(String),

    /// Browser launch or session errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// DevTools protocol errors
    #[error("CDP error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for dashcheck operations
pub type Result<T> = std::result::Result<T, CheckError>;

impl CheckError {
    /// Create a navigation error
    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::Navigation(msg.into())
    }

    /// Create an element-not-found error
    pub fn element(msg: impl Into<String>) -> Self {
        Self::ElementNotFound(msg.into())
    }

    /// Create a wait-timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::WaitTimeout(msg.into())
    }

    /// Create a screenshot error
    pub fn screenshot(msg: impl Into<String>) -> Self {
        Self::Screenshot(msg.into())
    }

    /// Create a browser error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CheckError::element("no button with accessible name \"Edit\"");
        assert_eq!(
            err.to_string(),
            "Element not found: no button with accessible name \"Edit\""
        );

        let err = CheckError::timeout("text \"No Changes\" not visible after 10000ms");
        assert!(err.to_string().starts_with("Visibility wait timed out"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CheckError = io.into();
        assert!(matches!(err, CheckError::Io(_)));
    }
}
