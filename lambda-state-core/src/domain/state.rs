//! Function state domain types
//!
//! A function has two independent status axes: its lifecycle state and the
//! status of the most recent update applied to it. Both carry an `Unknown`
//! variant that stands for "nothing observed yet" and for any name the service
//! reports that this crate does not know about.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum PrimaryState {
    Pending,
    Active,
    Failed,
    Inactive,
    #[default]
    Unknown,
}

impl PrimaryState {
    /// Wire name of the state (e.g. `"Active"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryState::Pending => "Pending",
            PrimaryState::Active => "Active",
            PrimaryState::Failed => "Failed",
            PrimaryState::Inactive => "Inactive",
            PrimaryState::Unknown => "Unknown",
        }
    }

    /// Maps a wire name to a state; unrecognised names map to `Unknown`
    pub fn from_wire(name: &str) -> Self {
        match name {
            "Pending" => PrimaryState::Pending,
            "Active" => PrimaryState::Active,
            "Failed" => PrimaryState::Failed,
            "Inactive" => PrimaryState::Inactive,
            _ => PrimaryState::Unknown,
        }
    }
}

impl std::fmt::Display for PrimaryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Option<String>> for PrimaryState {
    fn from(name: Option<String>) -> Self {
        name.as_deref().map_or(PrimaryState::Unknown, PrimaryState::from_wire)
    }
}

impl From<PrimaryState> for &'static str {
    fn from(state: PrimaryState) -> Self {
        state.as_str()
    }
}

/// Status of the last update operation applied to a function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum UpdateState {
    InProgress,
    Successful,
    Failed,
    #[default]
    Unknown,
}

impl UpdateState {
    /// Wire name of the update status (e.g. `"InProgress"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateState::InProgress => "InProgress",
            UpdateState::Successful => "Successful",
            UpdateState::Failed => "Failed",
            UpdateState::Unknown => "Unknown",
        }
    }

    /// Maps a wire name to an update status; unrecognised names map to `Unknown`
    pub fn from_wire(name: &str) -> Self {
        match name {
            "InProgress" => UpdateState::InProgress,
            "Successful" => UpdateState::Successful,
            "Failed" => UpdateState::Failed,
            _ => UpdateState::Unknown,
        }
    }
}

impl std::fmt::Display for UpdateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Option<String>> for UpdateState {
    fn from(name: Option<String>) -> Self {
        name.as_deref().map_or(UpdateState::Unknown, UpdateState::from_wire)
    }
}

impl From<UpdateState> for &'static str {
    fn from(state: UpdateState) -> Self {
        state.as_str()
    }
}

/// A value from either state axis
///
/// Used where one shape has to report a state without knowing which axis it
/// came from, e.g. in wait timeout errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateValue {
    Primary(PrimaryState),
    Update(UpdateState),
}

impl StateValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateValue::Primary(state) => state.as_str(),
            StateValue::Update(state) => state.as_str(),
        }
    }
}

impl std::fmt::Display for StateValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PrimaryState> for StateValue {
    fn from(state: PrimaryState) -> Self {
        StateValue::Primary(state)
    }
}

impl From<UpdateState> for StateValue {
    fn from(state: UpdateState) -> Self {
        StateValue::Update(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_state_wire_names() {
        for state in [
            PrimaryState::Pending,
            PrimaryState::Active,
            PrimaryState::Failed,
            PrimaryState::Inactive,
        ] {
            assert_eq!(PrimaryState::from_wire(state.as_str()), state);
        }
        assert_eq!(PrimaryState::from_wire("ActiveNonInvocable"), PrimaryState::Unknown);
    }

    #[test]
    fn test_update_state_unknown_name() {
        assert_eq!(UpdateState::from_wire("InProgress"), UpdateState::InProgress);
        assert_eq!(UpdateState::from_wire("inprogress"), UpdateState::Unknown);
    }

    #[test]
    fn test_defaults_are_unknown() {
        assert_eq!(PrimaryState::default(), PrimaryState::Unknown);
        assert_eq!(UpdateState::default(), UpdateState::Unknown);
    }

    #[test]
    fn test_deserialize_from_json() {
        let state: PrimaryState = serde_json::from_str("\"Inactive\"").unwrap();
        assert_eq!(state, PrimaryState::Inactive);

        let state: UpdateState = serde_json::from_str("null").unwrap();
        assert_eq!(state, UpdateState::Unknown);

        assert_eq!(
            serde_json::to_string(&UpdateState::Successful).unwrap(),
            "\"Successful\""
        );
    }

    #[test]
    fn test_failed_is_distinct_across_axes() {
        let primary = StateValue::from(PrimaryState::Failed);
        let update = StateValue::from(UpdateState::Failed);
        assert_ne!(primary, update);
        assert_eq!(primary.to_string(), update.to_string());
    }
}
