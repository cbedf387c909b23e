//! Lambda State Client
//!
//! Transports that fetch a function's status record from the function
//! service. The poller only depends on the [`RemoteStatusClient`] trait, so the
//! transport can be the AWS SDK, a plain HTTP endpoint (local emulators), or a
//! test double.
//!
//! # Example
//!
//! ```no_run
//! use lambda_state_client::{ClientOptions, RemoteStatusClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ClientOptions::new().with_region("eu-west-1").resolve().await?;
//!
//!     let status = client.fetch_status("myFunc").await?;
//!     println!("myFunc is {}", status.state());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
mod http;
mod sdk;

// Re-export commonly used types
pub use config::{ClientOptions, StaticCredentials};
pub use error::{ClientError, Result};
pub use http::HttpStatusClient;
pub use lambda_state_core::domain::status::StatusRecord;
pub use sdk::LambdaSdkClient;

use async_trait::async_trait;

/// Capability to fetch the current status record of a function
///
/// Implementations are shared between concurrent polls and must be safe to
/// call from several tasks at once.
#[async_trait]
pub trait RemoteStatusClient: Send + Sync {
    /// Fetches the status record for a function
    ///
    /// # Arguments
    /// * `identifier` - Function name, `name:qualifier`, or ARN, passed through verbatim
    ///
    /// # Errors
    /// Fails if the request fails or the response has no configuration payload.
    async fn fetch_status(&self, identifier: &str) -> Result<StatusRecord>;
}
