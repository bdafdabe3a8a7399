//! Error types for repeat operations

use thiserror::Error;

/// Main error type for repeater operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepeaterError {
    /// Count could not be read as an integer
    #[error("Invalid argument: repeat count must be an integer, got {0:?}")]
    InvalidCount(String),

    /// Count is non-negative but larger than this platform can address
    #[error("Invalid argument: repeat count {0} exceeds usize::MAX")]
    CountOverflow(i64),
}

/// Result type alias for repeater operations
pub type Result<T> = std::result::Result<T, RepeaterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_count_message() {
        let err = RepeaterError::InvalidCount("three".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid argument: repeat count must be an integer, got \"three\""
        );
    }

    #[test]
    fn test_overflow_message() {
        let err = RepeaterError::CountOverflow(i64::MAX);
        assert!(err.to_string().starts_with("Invalid argument:"));
        assert!(err.to_string().contains(&i64::MAX.to_string()));
    }
}
