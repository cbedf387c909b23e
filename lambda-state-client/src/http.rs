//! Plain HTTP transport
//!
//! Issues unsigned GetFunction requests against a base URL. Intended for local
//! emulators and proxies that front the function service; requests to AWS
//! itself go through [`crate::LambdaSdkClient`].

use async_trait::async_trait;
use lambda_state_core::dto::function::GetFunctionResponse;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::{RemoteStatusClient, StatusRecord};

/// API version prefix of the GetFunction route
const API_VERSION: &str = "2015-03-31";

/// HTTP implementation of [`RemoteStatusClient`]
#[derive(Debug, Clone)]
pub struct HttpStatusClient {
    /// Base URL of the endpoint (e.g., "http://localhost:4566")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl HttpStatusClient {
    /// Create a new HTTP status client
    ///
    /// # Example
    /// ```
    /// use lambda_state_client::HttpStatusClient;
    ///
    /// let client = HttpStatusClient::new("http://localhost:4566");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new HTTP status client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the endpoint
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn function_url(&self, identifier: &str) -> String {
        format!("{}/{}/functions/{}", self.base_url, API_VERSION, identifier)
    }

    /// Checks the status code and decodes the GetFunction body
    async fn handle_response(
        &self,
        identifier: &str,
        response: reqwest::Response,
    ) -> Result<GetFunctionResponse> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(identifier.to_string()));
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[async_trait]
impl RemoteStatusClient for HttpStatusClient {
    async fn fetch_status(&self, identifier: &str) -> Result<StatusRecord> {
        let url = self.function_url(identifier);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        self.handle_response(identifier, response)
            .await?
            .into_status()
            .ok_or_else(|| ClientError::MissingConfiguration {
                identifier: identifier.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_state_core::domain::state::{PrimaryState, UpdateState};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves a single canned response and returns the endpoint's base URL
    async fn serve_once(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = HttpStatusClient::new("http://localhost:4566/");
        assert_eq!(client.base_url(), "http://localhost:4566");
    }

    #[test]
    fn test_function_url_keeps_identifier_verbatim() {
        let client = HttpStatusClient::new("http://localhost:4566");
        assert_eq!(
            client.function_url("myFunc:myAlias"),
            "http://localhost:4566/2015-03-31/functions/myFunc:myAlias"
        );
    }

    #[tokio::test]
    async fn test_fetch_status() {
        let body = serde_json::json!({
            "Configuration": {
                "FunctionName": "myFunc",
                "State": "Pending",
                "LastUpdateStatus": "InProgress"
            }
        })
        .to_string();
        let base_url = serve_once("200 OK", body).await;

        let record = HttpStatusClient::new(base_url)
            .fetch_status("myFunc")
            .await
            .unwrap();

        assert_eq!(record.state(), PrimaryState::Pending);
        assert_eq!(record.update_state(), UpdateState::InProgress);
    }

    #[tokio::test]
    async fn test_fetch_status_without_configuration() {
        let base_url = serve_once("200 OK", "{}".to_string()).await;

        let err = HttpStatusClient::new(base_url)
            .fetch_status("myFunc")
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::MissingConfiguration { .. }));
        assert_eq!(err.to_string(), "Unable to retrieve lambda function state");
    }

    #[tokio::test]
    async fn test_fetch_status_not_found() {
        let base_url = serve_once("404 Not Found", "{}".to_string()).await;

        let err = HttpStatusClient::new(base_url)
            .fetch_status("missing")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_fetch_status_server_error() {
        let base_url = serve_once("500 Internal Server Error", "boom".to_string()).await;

        let err = HttpStatusClient::new(base_url)
            .fetch_status("myFunc")
            .await
            .unwrap_err();

        assert!(err.is_server_error());
    }
}
