//
//  dockerhub
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Docker Hub API
//!
//! This module provides [`DockerHubClient`], the single entry point for every
//! Docker Hub operation. Resource-specific methods live next to their types
//! in the sibling modules; this file owns the request pipeline they share.
//!
//! ## Request Pipeline
//!
//! Every operation runs the same sequence:
//!
//! 1. Encode the request body (if any) as JSON
//! 2. `POST /users/login/` with the credentials and decode `{"token": ...}`
//! 3. Send the target request with `Authorization: JWT <token>`
//! 4. Decode the response body into the requested type, or ignore it for
//!    deletes
//!
//! Any response outside 2xx, on either request, becomes
//! [`ApiError::Api`] carrying the raw body.
//!
//! The token is never cached. Each call logs in again, which keeps the
//! client free of mutable state: it is `Send + Sync` and can be shared
//! across tasks behind an `Arc` or simply cloned.
//!
//! ## Cancellation
//!
//! Every operation takes a [`CancellationToken`]. The token is checked
//! before each request is sent, and both the send and the body read race
//! against it, so a call cancelled after login never sends its target
//! request.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use super::common::{ApiError, Result};
use crate::auth::{Credentials, SessionToken};
use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Media type sent as both `Content-Type` and `Accept`.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Path of the login endpoint, relative to the API root.
pub const LOGIN_PATH: &str = "/users/login/";

/// The HTTP client for the Docker Hub v2 API.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use dockerhub::api::DockerHubClient;
///
/// // Dedicated HTTP client with a one minute timeout
/// let client = DockerHubClient::new("octocat", "hunter2")?;
/// # Ok::<(), dockerhub::api::ApiError>(())
/// ```
///
/// Callers that already own a `reqwest::Client` inject it instead:
///
/// ```rust,no_run
/// use dockerhub::api::DockerHubClient;
/// use dockerhub::auth::Credentials;
///
/// let http = reqwest::Client::new();
/// let client = DockerHubClient::with_http_client(http, Credentials::new("octocat", "hunter2"));
/// ```
///
/// # Making Calls
///
/// ```rust,no_run
/// use dockerhub::api::DockerHubClient;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> dockerhub::api::Result<()> {
/// let client = DockerHubClient::new("octocat", "hunter2")?;
/// let cancel = CancellationToken::new();
/// let repo = client.get_repository(&cancel, "octocat/hello-world").await?;
/// println!("{} private={}", repo.name, repo.is_private);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DockerHubClient {
    /// The underlying HTTP client, owned by the caller or built in `new`
    http: Client,
    /// API root without a trailing slash (e.g. "https://hub.docker.com/v2")
    base_url: String,
    /// Login credentials, exchanged for a token on every call
    credentials: Credentials,
}

impl DockerHubClient {
    /// Creates a client with its own HTTP client and the default one minute
    /// timeout, targeting `https://hub.docker.com/v2`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let http = build_http_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS))?;
        Ok(Self::with_http_client(
            http,
            Credentials::new(username, password),
        ))
    }

    /// Creates a client around a caller-owned HTTP client.
    ///
    /// The caller is responsible for the client's timeout; the default
    /// `reqwest::Client` has none.
    pub fn with_http_client(http: Client, credentials: Credentials) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
        }
    }

    /// Creates a client from the CLI configuration file settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if `base_url` is not a valid URL or the
    /// HTTP client cannot be built.
    pub fn from_config(config: &Config, credentials: Credentials) -> Result<Self> {
        Url::parse(&config.api.base_url).map_err(|e| {
            ApiError::Config(format!("invalid base_url '{}': {}", config.api.base_url, e))
        })?;

        let http = build_http_client(Duration::from_secs(config.api.timeout_secs))?;
        Ok(Self::with_http_client(http, credentials).with_base_url(&config.api.base_url))
    }

    /// Overrides the API root. Trailing slashes are dropped so that paths
    /// can always start with `/`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dockerhub::api::DockerHubClient;
    ///
    /// let client = DockerHubClient::new("octocat", "hunter2")?
    ///     .with_base_url("http://127.0.0.1:8080/v2/");
    /// assert_eq!(client.base_url(), "http://127.0.0.1:8080/v2");
    /// # Ok::<(), dockerhub::api::ApiError>(())
    /// ```
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    /// Returns the API root requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the Docker ID this client logs in as.
    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    /// Sends an authenticated request and decodes the JSON response.
    ///
    /// `body` is serialized before logging in, so an encoding failure never
    /// touches the network.
    pub(crate) async fn send<T, B>(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let text = self.execute(cancel, method, path, body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Sends an authenticated request whose response body is ignored.
    pub(crate) async fn send_empty<B>(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(cancel, method, path, body).await?;
        Ok(())
    }

    async fn execute<B>(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let payload = body.map(serde_json::to_vec).transpose()?;

        let token = self.login(cancel).await?;

        debug!(%method, path, "Sending Docker Hub request");
        let mut request = token.apply_to_request(self.json_request(method, path));
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        self.dispatch(cancel, request).await
    }

    /// Exchanges the credentials for a session token.
    async fn login(&self, cancel: &CancellationToken) -> Result<SessionToken> {
        debug!(username = self.credentials.username(), "Logging in to Docker Hub");

        let payload = serde_json::to_vec(&self.credentials)?;
        let request = self.json_request(Method::POST, LOGIN_PATH).body(payload);
        let text = self.dispatch(cancel, request).await?;

        Ok(serde_json::from_str(&text)?)
    }

    /// Sends a prepared request and returns the body of a 2xx response.
    async fn dispatch(&self, cancel: &CancellationToken, request: RequestBuilder) -> Result<String> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let response = until_cancelled(cancel, request.send()).await?;
        let status = response.status();
        let text = until_cancelled(cancel, response.text()).await?;

        if !status.is_success() {
            debug!(%status, "Docker Hub returned an error");
            return Err(ApiError::Api {
                status,
                message: text,
            });
        }

        Ok(text)
    }

    fn json_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
    }
}

fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
        .timeout(timeout)
        .build()
        .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {}", e)))
}

/// Races a reqwest future against the cancellation token.
async fn until_cancelled<T, F>(cancel: &CancellationToken, fut: F) -> Result<T>
where
    F: Future<Output = std::result::Result<T, reqwest::Error>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ApiError::Cancelled),
        result = fut => result.map_err(ApiError::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url_trims_trailing_slashes() {
        let client = DockerHubClient::with_http_client(Client::new(), Credentials::new("a", "b"))
            .with_base_url("http://localhost:1234/v2//");
        assert_eq!(client.base_url(), "http://localhost:1234/v2");
    }

    #[test]
    fn test_default_base_url() {
        let client = DockerHubClient::with_http_client(Client::new(), Credentials::new("a", "b"));
        assert_eq!(client.base_url(), "https://hub.docker.com/v2");
        assert_eq!(client.username(), "a");
    }

    #[test]
    fn test_from_config_rejects_bad_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        let err = DockerHubClient::from_config(&config, Credentials::new("a", "b")).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_json_request_headers() {
        let client = DockerHubClient::with_http_client(Client::new(), Credentials::new("a", "b"))
            .with_base_url("http://localhost/v2");
        let request = client
            .json_request(Method::GET, "/repositories/a/b/")
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://localhost/v2/repositories/a/b/");
        assert_eq!(request.headers()[CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(request.headers()[ACCEPT], JSON_CONTENT_TYPE);
    }

    #[tokio::test]
    async fn test_until_cancelled_prefers_cancellation() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result: Result<()> = until_cancelled(&cancel, std::future::pending()).await;
        assert!(matches!(result, Err(ApiError::Cancelled)));
    }
}
