//! Client construction options
//!
//! A caller either hands over a ready transport, or describes the AWS
//! connection (region and static credentials) and lets [`ClientOptions::resolve`]
//! build an SDK client from it.

use std::sync::Arc;

use aws_sdk_lambda::config::{Credentials, Region};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::{LambdaSdkClient, RemoteStatusClient};

/// Region used when neither the options nor the environment name one
pub const DEFAULT_REGION: &str = "us-east-1";

/// Provider name reported by static credentials
const CREDENTIALS_PROVIDER: &str = "lambda-state";

/// Static AWS credentials
#[derive(Clone)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl StaticCredentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }

    fn into_sdk(self) -> Credentials {
        Credentials::new(
            self.access_key_id,
            self.secret_access_key,
            self.session_token,
            None,
            CREDENTIALS_PROVIDER,
        )
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &self.session_token.as_ref().map(|_| "** redacted **"))
            .finish()
    }
}

/// Options for building a status transport
///
/// A supplied `client` takes precedence; `region` and `credentials` only
/// apply when the SDK client is built here.
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// AWS region (e.g., "eu-west-1")
    pub region: Option<String>,

    /// Static credentials; the SDK's default provider chain is used when absent
    pub credentials: Option<StaticCredentials>,

    /// Pre-built transport
    pub client: Option<Arc<dyn RemoteStatusClient>>,
}

impl ClientOptions {
    /// Creates empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options from environment variables
    ///
    /// Read environment variables:
    /// - AWS_REGION (optional)
    /// - AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY (optional, both or neither)
    /// - AWS_SESSION_TOKEN (optional)
    pub fn from_env() -> Self {
        let region = std::env::var("AWS_REGION").ok().filter(|r| !r.is_empty());

        let credentials = match (
            std::env::var("AWS_ACCESS_KEY_ID"),
            std::env::var("AWS_SECRET_ACCESS_KEY"),
        ) {
            (Ok(access_key_id), Ok(secret_access_key)) => Some(StaticCredentials::new(
                access_key_id,
                secret_access_key,
                std::env::var("AWS_SESSION_TOKEN").ok(),
            )),
            _ => None,
        };

        Self {
            region,
            credentials,
            client: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_credentials(mut self, credentials: StaticCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_client(mut self, client: Arc<dyn RemoteStatusClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Validates the options
    pub fn validate(&self) -> Result<()> {
        if self.region.as_deref().is_some_and(str::is_empty) {
            return Err(ClientError::InvalidConfig(
                "region cannot be empty".to_string(),
            ));
        }

        if let Some(credentials) = &self.credentials {
            if credentials.access_key_id.is_empty() {
                return Err(ClientError::InvalidConfig(
                    "access_key_id cannot be empty".to_string(),
                ));
            }
            if credentials.secret_access_key.is_empty() {
                return Err(ClientError::InvalidConfig(
                    "secret_access_key cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Region an SDK client built from these options would use
    pub fn effective_region(&self) -> String {
        self.region
            .clone()
            .or_else(|| std::env::var("AWS_REGION").ok().filter(|r| !r.is_empty()))
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    }

    /// Resolves the options to a single transport
    pub async fn resolve(self) -> Result<Arc<dyn RemoteStatusClient>> {
        self.validate()?;
        let region = self.effective_region();

        let ClientOptions {
            credentials,
            client,
            ..
        } = self;

        if let Some(client) = client {
            debug!("Using supplied status client");
            return Ok(client);
        }

        debug!("Building Lambda SDK client for region {}", region);

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region));
        if let Some(credentials) = credentials {
            loader = loader.credentials_provider(credentials.into_sdk());
        }
        let sdk_config = loader.load().await;

        Ok(Arc::new(LambdaSdkClient::from_conf(&sdk_config)))
    }
}

impl std::fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOptions")
            .field("region", &self.region)
            .field("credentials", &self.credentials)
            .field("client", &self.client.as_ref().map(|_| "<dyn RemoteStatusClient>"))
            .finish()
    }
}
