//! HTTP client with basic authentication and status-aware JSON helpers
//!
//! This module provides the transport used to talk to a Foreman/Katello-style
//! management server. Test servers habitually run with self-signed
//! certificates, so TLS verification can be switched off per config.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::error::{ClientError, Result};

/// Configuration for the HTTP client
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// Server base URL (e.g. "https://satellite.example.com")
    pub base_url: String,
    /// Username for basic authentication
    pub username: String,
    /// Password for basic authentication
    pub password: String,
    /// Verify the server TLS certificate
    pub verify_tls: bool,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost".to_string(),
            username: "admin".to_string(),
            password: "changeme".to_string(),
            verify_tls: false,
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config for a server base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    /// Set authentication credentials
    pub fn with_auth(mut self, username: &str, password: &str) -> Self {
        self.username = username.to_string();
        self.password = password.to_string();
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    /// Enable or disable TLS certificate verification
    pub fn with_tls_verification(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }
}

/// A response whose status code still carries protocol meaning for the caller
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

/// HTTP client carrying basic-auth credentials on every request
pub struct CapatazHttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl CapatazHttpClient {
    /// Create a new HTTP client
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        if url::Url::parse(&config.base_url).is_err() {
            return Err(ClientError::InvalidBaseUrl(config.base_url));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Build full URL for an API path
    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.build_url(path);
        debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .basic_auth(&self.config.username, Some(&self.config.password))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        self.handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let response = self
            .request(reqwest::Method::GET, path)
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request, preserving the response status code.
    ///
    /// Action endpoints answer HTTP 202 when they queue an asynchronous task,
    /// so the caller needs the status alongside the decoded body.
    pub async fn post_accepting<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<RawResponse> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        self.handle_raw(response).await
    }

    /// Make a PUT request, preserving the response status code
    pub async fn put_accepting<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<RawResponse> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        self.handle_raw(response).await
    }

    /// Make a DELETE request, preserving the response status code
    pub async fn delete_accepting(&self, path: &str) -> Result<RawResponse> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        self.handle_raw(response).await
    }

    /// Make a POST request with multipart form data, preserving the status
    /// code (used for subscription manifest uploads)
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<RawResponse> {
        let response = self
            .request(reqwest::Method::POST, path)
            .multipart(form)
            .send()
            .await?;
        self.handle_raw(response).await
    }

    /// Handle response and parse JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("request failed with status {}: {}", status, body);
            Err(ClientError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Handle response, keeping the status and decoding the body leniently
    async fn handle_raw(&self, response: Response) -> Result<RawResponse> {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = if text.is_empty() {
                serde_json::Value::Null
            } else {
                serde_json::from_str(&text)?
            };
            Ok(RawResponse { status, body })
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("request failed with status {}: {}", status, body);
            Err(ClientError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}
