//! HMAC-signing HTTP client implementation.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use hmac_auth_core::{sign, SecretKey, HEADER_NAME};

use crate::error::ClientError;

/// Options for [`HmacAuthClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Header carrying the credential (default: `Request-Hmac`).
    pub header_name: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            header_name: HEADER_NAME.to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Client for HMAC-protected endpoints.
#[derive(Debug, Clone)]
pub struct HmacAuthClient {
    client: Client,
    base_url: String,
    key: SecretKey,
    header_name: String,
}

/// Error body returned by the service: `{"error": "<reason>"}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HmacAuthClient {
    /// Create a client signing with `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        key: impl Into<SecretKey>,
    ) -> Result<Self, ClientError> {
        Self::with_options(base_url, key, ClientOptions::default())
    }

    /// Create a client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the header name
    /// is empty.
    pub fn with_options(
        base_url: impl Into<String>,
        key: impl Into<SecretKey>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        if options.header_name.trim().is_empty() {
            return Err(ClientError::Configuration("header name is empty".into()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            key: key.into(),
            header_name: options.header_name,
        })
    }

    /// The credential for `now`.
    #[must_use]
    pub fn credential_at(&self, now: DateTime<Utc>) -> String {
        sign(self.key.as_bytes(), now.timestamp())
    }

    /// The credential for the current time.
    #[must_use]
    pub fn credential(&self) -> String {
        self.credential_at(Utc::now())
    }

    /// Send a signed `GET` and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get(&self, path: &str) -> Result<reqwest::Response, ClientError> {
        let url = format!("{}{path}", self.base_url);

        tracing::debug!(url = %url, "Sending HMAC-signed request");

        let response = self
            .client
            .get(&url)
            .header(self.header_name.as_str(), self.credential())
            .send()
            .await?;

        Ok(response)
    }

    /// Send a signed `GET` and decode a JSON success body.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unauthorized`] on `401`, [`ClientError::Api`] on other
    /// non-success statuses, or a transport/decoding error.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.get(path).await?;
        Self::handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| status.to_string());

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(reason = %message, "Request rejected by HMAC authentication");
            return Err(ClientError::Unauthorized { reason: message });
        }

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_at_matches_known_vector() {
        let client = HmacAuthClient::new("http://localhost:5000/", "deadbeef").unwrap();
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(
            client.credential_at(now),
            "1700000000.dee498c4dbdecfbbfe87cde643baf924bc24b570d1e3a320e7dfea4ea07f36d9"
        );
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn empty_header_name_is_rejected() {
        let options = ClientOptions {
            header_name: " ".into(),
            ..ClientOptions::default()
        };
        assert!(matches!(
            HmacAuthClient::with_options("http://localhost", "k", options),
            Err(ClientError::Configuration(_))
        ));
    }
}
