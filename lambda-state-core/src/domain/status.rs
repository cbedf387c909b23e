//! Status record domain model
//!
//! Snapshot of a function's configuration as returned by one status fetch.

use serde::{Deserialize, Serialize};

use crate::domain::state::{PrimaryState, UpdateState};

/// Status snapshot of a function
///
/// Field names follow the service's `Configuration` payload. Absent state
/// fields decode to `Unknown`; every other field is informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_arn: Option<String>,

    /// Lifecycle state
    #[serde(default)]
    pub state: PrimaryState,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_reason_code: Option<String>,

    /// Status of the last update
    #[serde(default)]
    pub last_update_status: UpdateState,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_status_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_status_reason_code: Option<String>,

    /// Last modification timestamp, verbatim as the service formats it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl StatusRecord {
    /// Creates a record carrying only the two state axes
    pub fn new(state: PrimaryState, last_update_status: UpdateState) -> Self {
        Self {
            state,
            last_update_status,
            ..Default::default()
        }
    }

    pub fn state(&self) -> PrimaryState {
        self.state
    }

    pub fn update_state(&self) -> UpdateState {
        self.last_update_status
    }
}
