//! Section routing error types

use thiserror::Error;

/// Errors raised while resolving section identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    /// The identifier does not name one of the dashboard sections
    #[error("Unknown section: {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SectionError::Unknown("trends".to_string());
        assert_eq!(err.to_string(), "Unknown section: trends");
    }
}
