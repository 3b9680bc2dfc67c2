//! Dataset registry error types

use thiserror::Error;

/// Errors raised by the dataset registry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// No dataset is registered under this name
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    /// A literal table violates one of its consistency rules
    #[error("Invalid dataset '{dataset}': {reason}")]
    InvalidDataset { dataset: String, reason: String },
}

/// Result type alias for registry operations
pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::UnknownDataset("income".to_string());
        assert_eq!(err.to_string(), "Unknown dataset: income");

        let err = DataError::InvalidDataset {
            dataset: "prevalence".to_string(),
            reason: "slices sum to 99.0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid dataset 'prevalence': slices sum to 99.0"
        );
    }
}
