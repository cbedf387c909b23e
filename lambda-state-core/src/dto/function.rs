//! GetFunction DTOs

use serde::{Deserialize, Serialize};

use crate::domain::status::StatusRecord;

/// Body of a GetFunction response
///
/// Only `Configuration` is read; code location, tags and concurrency settings
/// are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetFunctionResponse {
    #[serde(rename = "Configuration", default)]
    pub configuration: Option<StatusRecord>,
}

impl GetFunctionResponse {
    /// Takes the status record out of the response, if the service sent one
    pub fn into_status(self) -> Option<StatusRecord> {
        self.configuration
    }
}
