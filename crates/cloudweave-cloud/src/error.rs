//! Cloud provider error types

use crate::operation::Operation;
use cloudweave_core::DocumentError;
use std::time::Duration;
use thiserror::Error;

/// Provider error codes worth another attempt: throttling and service-side faults
pub const TRANSIENT_CODES: &[&str] = &[
    "ThrottlingException",
    "Throttling",
    "TooManyRequestsException",
    "RequestLimitExceeded",
    "SlowDown",
    "InternalServiceException",
    "InternalFailure",
    "InternalError",
    "ServiceUnavailable",
    "ServiceUnavailableException",
    "RequestTimeout",
    "RequestTimeoutException",
];

/// Cloud provider errors
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Error reported by the provider API, identified by its error code
    #[error("{code}: {message}")]
    Api { code: String, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unexpected state '{state}', wanted target '{}'{}", join_states(.expected), reason_suffix(.reason))]
    UnexpectedState {
        state: String,
        expected: Vec<String>,
        reason: Option<String>,
    },

    #[error(
        "timeout while waiting for state to become '{}' (last state: '{}', timeout: {timeout:?}){}",
        join_states(.expected),
        state_or_empty(.last_state),
        reason_suffix(.last_error)
    )]
    Timeout {
        expected: Vec<String>,
        last_state: Option<String>,
        timeout: Duration,
        last_error: Option<String>,
    },

    #[error("wait cancelled (last state: '{}')", state_or_empty(.last_state))]
    Cancelled { last_state: Option<String> },

    /// Lifecycle failure with the operation and resource identity attached
    #[error("{operation} {resource} ({id}): {source}")]
    Operation {
        operation: Operation,
        resource: String,
        id: String,
        #[source]
        source: Box<CloudError>,
    },

    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl CloudError {
    pub fn api(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Provider error code, looking through operation context
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            Self::Operation { source, .. } => source.code(),
            _ => None,
        }
    }

    /// Whether the provider answered with one of `codes` (exact match)
    pub fn is_code(&self, codes: &[&str]) -> bool {
        self.code().is_some_and(|code| codes.contains(&code))
    }

    /// Throttling and service-side failures ([`TRANSIENT_CODES`])
    pub fn is_transient(&self) -> bool {
        self.is_code(TRANSIENT_CODES)
    }
}

fn join_states(states: &[String]) -> String {
    states.join(", ")
}

fn state_or_empty(state: &Option<String>) -> &str {
    state.as_deref().unwrap_or("")
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(reason) if !reason.is_empty() => format!(": {reason}"),
        _ => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, CloudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_code_looks_through_operation() {
        let err = CloudError::Operation {
            operation: Operation::Read,
            resource: "S3 Bucket Website Configuration".into(),
            id: "site".into(),
            source: Box::new(CloudError::api("NoSuchBucket", "The specified bucket does not exist")),
        };

        assert!(err.is_code(&["NoSuchWebsiteConfiguration", "NoSuchBucket"]));
        assert!(!err.is_code(&["AccessDenied"]));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_state_error_messages() {
        let err = CloudError::UnexpectedState {
            state: "FAILED".into(),
            expected: vec!["READY".into()],
            reason: Some("subnet has no free addresses".into()),
        };
        assert_eq!(
            err.to_string(),
            "unexpected state 'FAILED', wanted target 'READY': subnet has no free addresses"
        );

        let err = CloudError::Timeout {
            expected: vec!["ACTIVATED".into(), "CREATED".into()],
            last_state: Some("CREATING".into()),
            timeout: Duration::from_secs(300),
            last_error: None,
        };
        assert_eq!(
            err.to_string(),
            "timeout while waiting for state to become 'ACTIVATED, CREATED' (last state: 'CREATING', timeout: 300s)"
        );
    }

    #[test]
    fn test_transient_codes() {
        assert!(CloudError::api("ThrottlingException", "slow down").is_transient());
        assert!(CloudError::api("InternalServiceException", "oops").is_transient());
        assert!(!CloudError::api("AccessDeniedException", "denied").is_transient());
        assert!(!CloudError::api("ValidationException", "bad input").is_transient());

        let wrapped = CloudError::Operation {
            operation: Operation::Read,
            resource: "Glue Trigger".into(),
            id: "nightly".into(),
            source: Box::new(CloudError::api("ServiceUnavailable", "try again")),
        };
        assert!(wrapped.is_transient());
    }

    #[test]
    fn test_non_api_errors_are_not_transient() {
        assert!(!CloudError::InvalidConfig("x".into()).is_transient());
        assert!(!CloudError::ResourceNotFound("x".into()).is_code(&["x"]));
    }
}
