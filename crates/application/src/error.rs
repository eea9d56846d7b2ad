//! Application-level errors

use domain::{DomainError, RequestId};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The route planner task is no longer running
    #[error("Route planner is not running")]
    PlannerUnavailable,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }
}

/// Outcome of a route request that did not produce a route
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Malformed coordinate or mode text, rejected at the input boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The directions provider reported a transport or service error
    #[error("Directions provider failed: {0}")]
    ProviderFailure(String),

    /// The provider answered but had no route between the points
    #[error("No route found")]
    NoRouteFound,

    /// A newer request was issued before this one completed
    #[error("Request {0} was superseded by a newer request")]
    Superseded(RequestId),
}

impl RouteError {
    /// Whether the user should be told about this outcome
    #[must_use]
    pub const fn is_user_visible(&self) -> bool {
        !matches!(self, Self::Superseded(_))
    }
}

impl From<DomainError> for RouteError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(message) => Self::InvalidInput(message),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_service_is_retryable() {
        assert!(ApplicationError::ExternalService("down".to_string()).is_retryable());
        assert!(!ApplicationError::PlannerUnavailable.is_retryable());
        assert!(!ApplicationError::Configuration("x".to_string()).is_retryable());
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::InvalidInput("abc".to_string()).into();
        assert_eq!(err.to_string(), "Invalid input: abc");
    }

    #[test]
    fn superseded_is_silent() {
        assert!(!RouteError::Superseded(RequestId::new(1)).is_user_visible());
        assert!(RouteError::NoRouteFound.is_user_visible());
        assert!(RouteError::ProviderFailure("timeout".to_string()).is_user_visible());
        assert!(RouteError::InvalidInput("x".to_string()).is_user_visible());
    }

    #[test]
    fn route_error_messages() {
        assert_eq!(
            RouteError::ProviderFailure("HTTP 503".to_string()).to_string(),
            "Directions provider failed: HTTP 503"
        );
        assert_eq!(
            RouteError::Superseded(RequestId::new(4)).to_string(),
            "Request #4 was superseded by a newer request"
        );
    }

    #[test]
    fn domain_error_becomes_invalid_input() {
        let err: RouteError = DomainError::InvalidInput("lat".to_string()).into();
        assert_eq!(err.to_string(), "Invalid input: lat");

        let err: RouteError = DomainError::InvalidCoordinate {
            latitude: 95.0,
            longitude: 13.0,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid input: Invalid coordinate: (95, 13) is out of range"
        );
    }
}
