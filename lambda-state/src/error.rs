//! Error types for the state poller

use lambda_state_client::ClientError;
use lambda_state_core::domain::state::StateValue;
use thiserror::Error;

/// Result type alias for poller operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`crate::StatePoller`]
#[derive(Debug, Error)]
pub enum Error {
    /// The status could not be fetched
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The function did not reach the wanted state in time
    #[error(transparent)]
    State(#[from] StateError),
}

impl Error {
    /// Check if this error is a wait timeout rather than a transport failure
    pub fn is_state_error(&self) -> bool {
        matches!(self, Self::State(_))
    }

    pub fn as_state_error(&self) -> Option<&StateError> {
        match self {
            Self::State(err) => Some(err),
            Self::Client(_) => None,
        }
    }

    pub fn as_client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client(err) => Some(err),
            Self::State(_) => None,
        }
    }
}

/// A wait ran out of time before the function reached the expected state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StateError {
    /// Human-readable description naming the function
    pub message: String,
    /// State the caller waited for
    pub expected_state: StateValue,
    /// State seen on the last poll (`Unknown` if none completed)
    pub last_check_state: StateValue,
}

impl StateError {
    /// Creates the timeout error for a function
    pub fn never_entered(
        identifier: &str,
        expected_state: impl Into<StateValue>,
        last_check_state: impl Into<StateValue>,
    ) -> Self {
        Self {
            message: format!("{} never entered the desired state", identifier),
            expected_state: expected_state.into(),
            last_check_state: last_check_state.into(),
        }
    }
}
