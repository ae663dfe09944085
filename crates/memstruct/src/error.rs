//! Error types for memstruct

use std::fmt;

/// Result type alias for memstruct operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for structure operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Capacity must be at least 1
    InvalidCapacity(usize),

    /// Removal requested from an empty list
    EmptyList,

    /// Maximum requested from an empty tree
    EmptyTree,

    /// Handle does not refer to a live node of this list
    StaleHandle,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(limit) => {
                write!(f, "Invalid capacity: {} (must be greater than 0)", limit)
            }
            Error::EmptyList => write!(f, "List is empty"),
            Error::EmptyTree => write!(f, "Tree is empty"),
            Error::StaleHandle => write!(f, "Node handle is not part of this list"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::InvalidCapacity(0).to_string(),
            "Invalid capacity: 0 (must be greater than 0)"
        );
        assert_eq!(Error::EmptyList.to_string(), "List is empty");
        assert_eq!(Error::EmptyTree.to_string(), "Tree is empty");
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::StaleHandle);
        assert!(err.source().is_none());
    }
}
