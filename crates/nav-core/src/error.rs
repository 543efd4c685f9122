//! Navigation errors

/// Navigation-related errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavError {
    /// More stack entries were requested for removal than exist
    #[error("stack underflow: requested {requested} pops, {available} entries available")]
    StackUnderflow {
        /// Number of entries the caller asked to remove
        requested: usize,
        /// Number of entries actually on the stack
        available: usize,
    },
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavError>;
