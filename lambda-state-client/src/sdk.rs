//! AWS SDK transport
//!
//! Fetches status records with the `GetFunction` operation of the Lambda SDK.

use async_trait::async_trait;
use aws_sdk_lambda::error::DisplayErrorContext;
use aws_sdk_lambda::types::FunctionConfiguration;
use lambda_state_core::domain::state::{PrimaryState, UpdateState};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::{RemoteStatusClient, StatusRecord};

/// [`RemoteStatusClient`] backed by the AWS Lambda SDK
#[derive(Debug, Clone)]
pub struct LambdaSdkClient {
    client: aws_sdk_lambda::Client,
}

impl LambdaSdkClient {
    /// Wraps an already configured SDK client
    pub fn new(client: aws_sdk_lambda::Client) -> Self {
        Self { client }
    }

    /// Builds a client from a loaded SDK configuration
    pub fn from_conf(config: &aws_config::SdkConfig) -> Self {
        Self::new(aws_sdk_lambda::Client::new(config))
    }

    /// Underlying SDK client
    pub fn inner(&self) -> &aws_sdk_lambda::Client {
        &self.client
    }
}

#[async_trait]
impl RemoteStatusClient for LambdaSdkClient {
    async fn fetch_status(&self, identifier: &str) -> Result<StatusRecord> {
        debug!("GetFunction {}", identifier);

        let output = self
            .client
            .get_function()
            .function_name(identifier)
            .send()
            .await
            .map_err(|err| {
                let not_found = err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_not_found_exception());
                if not_found {
                    ClientError::NotFound(identifier.to_string())
                } else {
                    ClientError::SdkError(DisplayErrorContext(&err).to_string())
                }
            })?;

        output
            .configuration()
            .map(status_from_configuration)
            .ok_or_else(|| ClientError::MissingConfiguration {
                identifier: identifier.to_string(),
            })
    }
}

/// Converts the SDK's configuration shape into a [`StatusRecord`]
///
/// States go through their wire names so SDK variants this crate does not
/// model end up as `Unknown`.
fn status_from_configuration(config: &FunctionConfiguration) -> StatusRecord {
    StatusRecord {
        function_name: config.function_name().map(str::to_string),
        function_arn: config.function_arn().map(str::to_string),
        state: config
            .state()
            .map_or(PrimaryState::Unknown, |s| PrimaryState::from_wire(s.as_str())),
        state_reason: config.state_reason().map(str::to_string),
        state_reason_code: config.state_reason_code().map(|c| c.as_str().to_string()),
        last_update_status: config
            .last_update_status()
            .map_or(UpdateState::Unknown, |s| UpdateState::from_wire(s.as_str())),
        last_update_status_reason: config.last_update_status_reason().map(str::to_string),
        last_update_status_reason_code: config
            .last_update_status_reason_code()
            .map(|c| c.as_str().to_string()),
        last_modified: config.last_modified().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_lambda::types::{LastUpdateStatus, State};

    #[test]
    fn test_status_from_configuration() {
        let config = FunctionConfiguration::builder()
            .function_name("myFunc")
            .function_arn("arn:aws:lambda:us-east-1:0123456789012:function:myFunc")
            .state(State::Inactive)
            .last_update_status(LastUpdateStatus::InProgress)
            .build();

        let record = status_from_configuration(&config);

        assert_eq!(record.function_name.as_deref(), Some("myFunc"));
        assert_eq!(record.state(), PrimaryState::Inactive);
        assert_eq!(record.update_state(), UpdateState::InProgress);
        assert!(record.state_reason.is_none());
    }

    #[test]
    fn test_unmodelled_sdk_state_is_unknown() {
        let config = FunctionConfiguration::builder()
            .state(State::from("Deactivating"))
            .build();

        let record = status_from_configuration(&config);

        assert_eq!(record.state(), PrimaryState::Unknown);
        assert_eq!(record.update_state(), UpdateState::Unknown);
    }
}
