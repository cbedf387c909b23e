//! Lambda State
//!
//! Observes the state of a remote function: fetch its current lifecycle or
//! update status once, or poll until it reaches a wanted value.
//!
//! Architecture:
//! - Core (`lambda-state-core`): state enums and the status record
//! - Client (`lambda-state-client`): transports that fetch status records
//! - Poller (this crate): single checks and bounded wait loops
//!
//! # Example
//!
//! ```no_run
//! use lambda_state::{ClientOptions, PrimaryState, StatePoller};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let poller = StatePoller::from_options(ClientOptions::new().with_region("us-east-1")).await?;
//!
//!     let state = poller.wait_for_state("myFunc", PrimaryState::Active, None).await?;
//!     println!("myFunc is {}", state);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod poller;

// Re-export commonly used types
pub use error::{Error, Result, StateError};
pub use lambda_state_client::{
    ClientError, ClientOptions, HttpStatusClient, LambdaSdkClient, RemoteStatusClient,
    StaticCredentials,
};
pub use lambda_state_core::domain::state::{PrimaryState, StateValue, UpdateState};
pub use lambda_state_core::domain::status::StatusRecord;
pub use poller::{DEFAULT_TIMEOUT, POLL_INCREMENT, StatePoller};
