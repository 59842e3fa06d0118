//! # Search Error Types
//!
//! Structured error handling for the search layer using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// Criteria rejected before any query was issued.
    ///
    /// Only raised when strict age-range validation is enabled; by default every
    /// combination of criteria is accepted, including contradictory ranges.
    #[error("Invalid search criteria: {reason}")]
    InvalidCriteria { reason: String },

    #[error("Invalid page request: {reason}")]
    InvalidPageRequest { reason: String },

    /// The execution capability failed. Never retried by the search layer.
    #[error("Query execution failed: {operation}: {message}")]
    QueryExecution { operation: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SearchError {
    pub fn query_execution(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::QueryExecution {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn is_query_execution(&self) -> bool {
        matches!(self, Self::QueryExecution { .. })
    }
}

impl From<sqlx::Error> for SearchError {
    fn from(err: sqlx::Error) -> Self {
        Self::query_execution("sqlx", err.to_string())
    }
}

impl From<config::ConfigError> for SearchError {
    fn from(err: config::ConfigError) -> Self {
        Self::configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
