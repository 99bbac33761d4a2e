//! Error types and result aliases for npmq operations.
//!
//! Provides a unified error type covering every failure a registry lookup can
//! hit, with the operation context (package name or query) baked into the
//! variant so callers get actionable messages without extra wrapping.

use thiserror::Error;

/// Unified error type for all npmq operations
#[derive(Error, Debug)]
pub enum NpmqError {
    // Lookup errors carrying operation context
    #[error("Package '{name}' not found")]
    PackageNotFound { name: String },

    #[error("Search for '{query}' failed")]
    SearchFailed { query: String },

    #[error("Failed to fetch download stats for '{name}'")]
    DownloadStatsNotFound { name: String },

    // Registry status classification
    #[error("Registry rate limit exceeded (HTTP 429)")]
    RateLimited,

    #[error("Registry upstream error (HTTP 500)")]
    UpstreamError,

    #[error("Registry request failed with status {status}")]
    RequestFailed { status: u16 },

    // Transport-level failure. The display message is the underlying
    // transport error's own message, not a wrapper around it.
    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unknown error: {message}")]
    Unknown { message: String },

    // Tool dispatch errors
    #[error("Unknown tool '{name}'")]
    UnknownTool { name: String },

    #[error("Invalid arguments for tool '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },

    // IO errors (stdio server, CLI)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for npmq operations
pub type NpmqResult<T> = Result<T, NpmqError>;

impl NpmqError {
    /// Create a network error from any transport error type
    pub fn network<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Check if re-invoking the operation could plausibly succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            NpmqError::RateLimited
                | NpmqError::UpstreamError
                | NpmqError::Network { .. }
                | NpmqError::Io { .. }
        )
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            NpmqError::PackageNotFound { .. } => {
                Some("Check the package name spelling or try searching the registry")
            }
            NpmqError::SearchFailed { .. } => {
                Some("Check the search query and option values, then try again")
            }
            NpmqError::RateLimited => {
                Some("The registry is throttling requests, wait a moment and retry")
            }
            NpmqError::Network { .. } => Some("Check your internet connection and try again"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_carry_context() {
        let err = NpmqError::PackageNotFound {
            name: "left-pad".to_string(),
        };
        assert_eq!(err.to_string(), "Package 'left-pad' not found");

        let err = NpmqError::SearchFailed {
            query: "react".to_string(),
        };
        assert_eq!(err.to_string(), "Search for 'react' failed");

        let err = NpmqError::DownloadStatsNotFound {
            name: "left-pad".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch download stats for 'left-pad'"
        );
    }

    #[test]
    fn test_network_error_preserves_transport_message() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = NpmqError::network(io);
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(NpmqError::RateLimited.is_recoverable());
        assert!(NpmqError::UpstreamError.is_recoverable());
        assert!(!NpmqError::PackageNotFound {
            name: "x".to_string()
        }
        .is_recoverable());
        assert!(!NpmqError::RequestFailed { status: 400 }.is_recoverable());
    }
}
