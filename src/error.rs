//! Error handling for dotmvw
//!
//! This module defines custom error types and a Result alias for use
//! throughout the crate.

use thiserror::Error;

/// Main error type for session construction and writing
#[derive(Error, Debug)]
pub enum SessionError {
    /// An attach was requested under a node that is not part of the tree
    #[error("Invalid parent: no tree node to attach `{0}` under")]
    InvalidParent(String),

    /// The requested (window count, layout configuration) pair is not permitted
    #[error("Invalid layout: {windows} window(s) cannot use configuration {configuration}")]
    InvalidLayoutConfiguration { windows: usize, configuration: u32 },

    /// The requested (result type, data component) pair is not permitted
    #[error("Invalid contour: data component \"{data_component}\" is not valid for result type \"{result_type}\"")]
    InvalidContourSpecification {
        result_type: String,
        data_component: String,
    },

    /// A data update was addressed to a node id that does not exist
    #[error("Invalid update target: no node with id `{0}`")]
    InvalidUpdateTarget(String),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<SessionError>,
    },
}

impl SessionError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        SessionError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for dotmvw operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SessionError::InvalidLayoutConfiguration {
            windows: 2,
            configuration: 1,
        };
        assert_eq!(
            err.to_string(),
            "Invalid layout: 2 window(s) cannot use configuration 1"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = SessionError::InvalidUpdateTarget("title9".to_string());
        let with_ctx = err.with_context("Failed to rename page");
        assert!(with_ctx.to_string().contains("Failed to rename page"));
    }

    #[test]
    fn test_contour_error_names_both_sides() {
        let err = SessionError::InvalidContourSpecification {
            result_type: "Displacement".to_string(),
            data_component: "Foo".to_string(),
        };
        assert!(err.to_string().contains("Displacement"));
        assert!(err.to_string().contains("Foo"));
    }
}
