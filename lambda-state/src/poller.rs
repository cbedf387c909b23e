//! State poller
//!
//! Fetches a function's status and waits for it to reach a target value.
//! Waits poll at a constant interval until the target is seen or the timeout
//! is exceeded; transport failures end the wait immediately.

use std::fmt::Display;
use std::sync::Arc;

use lambda_state_client::{ClientOptions, RemoteStatusClient};
use lambda_state_core::domain::state::{PrimaryState, StateValue, UpdateState};
use lambda_state_core::domain::status::StatusRecord;
use tokio::time::{self, Duration};
use tracing::{debug, warn};

use crate::error::{Result, StateError};

/// Timeout used when a wait is given none
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Pause between two status checks of a wait
pub const POLL_INCREMENT: Duration = Duration::from_millis(1_000);

/// Observes function state through a [`RemoteStatusClient`]
///
/// Cloning is cheap and clones share the transport. Every wait keeps its own
/// loop state, so any number of waits may run concurrently on one poller.
#[derive(Clone)]
pub struct StatePoller {
    client: Arc<dyn RemoteStatusClient>,
}

impl StatePoller {
    /// Creates a poller over an existing transport
    pub fn new(client: Arc<dyn RemoteStatusClient>) -> Self {
        Self { client }
    }

    /// Creates a poller from construction options
    ///
    /// # Example
    /// ```no_run
    /// # use lambda_state::{ClientOptions, StaticCredentials, StatePoller};
    /// # async fn example() -> anyhow::Result<()> {
    /// let poller = StatePoller::from_options(
    ///     ClientOptions::new()
    ///         .with_region("eu-west-1")
    ///         .with_credentials(StaticCredentials::new("AKID", "secret", None)),
    /// )
    /// .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn from_options(options: ClientOptions) -> Result<Self> {
        Ok(Self::new(options.resolve().await?))
    }

    /// Creates a poller configured from the `AWS_*` environment variables
    pub async fn from_env() -> Result<Self> {
        Self::from_options(ClientOptions::from_env()).await
    }

    /// Fetches the full status record of a function
    pub async fn fetch_status(&self, identifier: &str) -> Result<StatusRecord> {
        Ok(self.client.fetch_status(identifier).await?)
    }

    /// Returns the current lifecycle state of a function
    pub async fn check_state(&self, identifier: &str) -> Result<PrimaryState> {
        Ok(self.fetch_status(identifier).await?.state())
    }

    /// Returns the status of the last update applied to a function
    pub async fn check_update_state(&self, identifier: &str) -> Result<UpdateState> {
        Ok(self.fetch_status(identifier).await?.update_state())
    }

    /// Polls until the function's lifecycle state equals `target`
    ///
    /// # Arguments
    /// * `identifier` - Function name, `name:qualifier`, or ARN
    /// * `target` - State to wait for
    /// * `timeout` - Polling budget, [`DEFAULT_TIMEOUT`] when `None`
    ///
    /// # Errors
    /// [`crate::Error::State`] if the state is not reached in time,
    /// [`crate::Error::Client`] as soon as a fetch fails.
    pub async fn wait_for_state(
        &self,
        identifier: &str,
        target: PrimaryState,
        timeout: Option<Duration>,
    ) -> Result<PrimaryState> {
        self.wait_for(identifier, target, timeout, StatusRecord::state)
            .await
    }

    /// Polls until the function's last update status equals `target`
    ///
    /// Same loop and errors as [`StatePoller::wait_for_state`].
    pub async fn wait_for_update_state(
        &self,
        identifier: &str,
        target: UpdateState,
        timeout: Option<Duration>,
    ) -> Result<UpdateState> {
        self.wait_for(identifier, target, timeout, StatusRecord::update_state)
            .await
    }

    /// Shared wait loop over one state axis
    ///
    /// `elapsed` counts whole increments, and a check still happens when it
    /// equals the timeout, so a wait can overrun its timeout by up to one
    /// increment.
    async fn wait_for<S>(
        &self,
        identifier: &str,
        target: S,
        timeout: Option<Duration>,
        extract: fn(&StatusRecord) -> S,
    ) -> Result<S>
    where
        S: Copy + PartialEq + Default + Display + Into<StateValue>,
    {
        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let mut elapsed = Duration::ZERO;
        let mut last_seen = S::default();
        let mut attempt: u32 = 0;

        debug!(
            "Waiting for {} to enter {} (timeout: {:?})",
            identifier, target, timeout
        );

        while elapsed <= timeout {
            attempt += 1;
            last_seen = extract(&self.fetch_status(identifier).await?);

            if last_seen == target {
                debug!(
                    "{} entered {} after {} check(s)",
                    identifier, target, attempt
                );
                return Ok(last_seen);
            }

            debug!(
                "{} is {} (check {}), retrying in {:?}",
                identifier, last_seen, attempt, POLL_INCREMENT
            );
            time::sleep(POLL_INCREMENT).await;
            elapsed += POLL_INCREMENT;
        }

        warn!(
            "{} never entered {} within {:?} (last seen: {})",
            identifier, target, timeout, last_seen
        );
        Err(StateError::never_entered(identifier, target, last_seen).into())
    }
}

impl std::fmt::Debug for StatePoller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatePoller").finish_non_exhaustive()
    }
}
