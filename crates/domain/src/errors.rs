//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Malformed user input (non-numeric coordinate text, unknown mode)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numeric coordinate outside the valid latitude/longitude range
    #[error("Invalid coordinate: ({latitude}, {longitude}) is out of range")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

impl DomainError {
    /// Whether the error stems from what the user typed
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InvalidCoordinate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_error_message() {
        let err = DomainError::InvalidInput("abc".to_string());
        assert_eq!(err.to_string(), "Invalid input: abc");
        assert!(err.is_input_error());
    }

    #[test]
    fn invalid_coordinate_error_message() {
        let err = DomainError::InvalidCoordinate {
            latitude: 95.0,
            longitude: 13.0,
        };
        assert_eq!(err.to_string(), "Invalid coordinate: (95, 13) is out of range");
        assert!(err.is_input_error());
    }
}
