//! HTTP client for network calls to the reservations API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::ErrorBody;

/// HTTP client for the reservations API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request and decode the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let err = Self::status_error(status, response.text().await?);
            tracing::warn!("GET {} failed: {}", url, err);
            return Err(err);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Make a DELETE request, ignoring any success body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!("DELETE {}", url);
        let mut request = self.client.delete(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let err = Self::status_error(status, response.text().await?);
            tracing::warn!("DELETE {} failed: {}", url, err);
            return Err(err);
        }

        Ok(())
    }

    /// Map a non-success status and body into a client error.
    ///
    /// The body is expected to be an [`ErrorBody`] envelope; anything
    /// else degrades to a bare status error.
    fn status_error(status: StatusCode, body: String) -> ClientError {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .ok();

        match (status, message) {
            (StatusCode::NOT_FOUND, message) => {
                ClientError::NotFound(message.unwrap_or_default())
            }
            (status, Some(message)) => ClientError::Api {
                status: status.as_u16(),
                message,
            },
            (status, None) => ClientError::Status(status.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_extracts_envelope_message() {
        let err = HttpClient::status_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error":"Cannot cancel within 2 hours"}"#.to_string(),
        );
        assert!(matches!(
            err,
            ClientError::Api { status: 500, ref message } if message == "Cannot cancel within 2 hours"
        ));
    }

    #[test]
    fn status_error_maps_not_found() {
        let err = HttpClient::status_error(
            StatusCode::NOT_FOUND,
            r#"{"error":"Unauthorized"}"#.to_string(),
        );
        assert!(matches!(err, ClientError::NotFound(ref m) if m == "Unauthorized"));

        let bare = HttpClient::status_error(StatusCode::NOT_FOUND, String::new());
        assert!(matches!(bare, ClientError::NotFound(ref m) if m.is_empty()));
    }

    #[test]
    fn status_error_without_envelope_is_bare_status() {
        let err = HttpClient::status_error(
            StatusCode::BAD_GATEWAY,
            "<html>upstream down</html>".to_string(),
        );
        assert!(matches!(err, ClientError::Status(502)));
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = ClientConfig::new("http://localhost:8080/").build_http_client();
        assert_eq!(
            client.url("/api/reservations"),
            "http://localhost:8080/api/reservations"
        );
        assert_eq!(
            client.url("api/reservations/5"),
            "http://localhost:8080/api/reservations/5"
        );
    }
}
