// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Error types for list construction.
//!
//! Actions on a list never fail; misuse is absorbed as a no-op. Errors only
//! surface from the optional validation done when a list is created.

/// Result type alias for list operations.
pub type Result<T> = std::result::Result<T, ListError>;

/// Errors that can occur when validating a list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// Two items derive the same key.
    #[error("duplicate key: items at positions {first} and {second} share a key")]
    DuplicateKey { first: usize, second: usize },
}

impl ListError {
    /// Create a duplicate key error.
    pub fn duplicate_key(first: usize, second: usize) -> Self {
        Self::DuplicateKey { first, second }
    }
}
