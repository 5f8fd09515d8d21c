//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Volatility solver failed to converge: {detail}")]
    NonConvergence { detail: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
