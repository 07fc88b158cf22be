//
//  pagerduty-backend
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the PagerDuty REST API
//!
//! This module provides the transport every operation goes through. One call
//! to [`PagerDutyClient::send`] issues exactly one request with the fixed
//! PagerDuty headers and returns the raw status and body, or a transport
//! failure. Decoding and status classification happen in
//! [`PagerDutyClient::get`] and [`PagerDutyClient::post`], driven by the
//! operation's [`Endpoint`] table.
//!
//! ## Features
//!
//! - Base URL held by the client instance, never process-wide
//! - Fresh credential from the [`TokenProvider`] before every request
//! - `Accept: application/vnd.pagerduty+json;version=2` on every request
//! - No retries; every failure is handed to the caller
//! - Optional request timeout layered on the underlying HTTP client

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::common::{ApiError, Endpoint};
use crate::auth::{AuthCredential, EnvTokenProvider, TokenProvider};
use crate::config::ApiConfig;

/// Default PagerDuty REST API location.
pub const DEFAULT_BASE_URL: &str = "https://api.pagerduty.com";

/// Media type selecting version 2 of the REST API.
pub const ACCEPT_HEADER: &str = "application/vnd.pagerduty+json;version=2";

/// Settings the client is constructed with.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use pagerduty_backend::api::client::ClientConfig;
///
/// let config = ClientConfig::new("https://api.eu.pagerduty.com")
///     .with_timeout(Duration::from_secs(30));
/// assert_eq!(config.base_url, "https://api.eu.pagerduty.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST API.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Sets a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("pd/{}", crate::VERSION),
        }
    }
}

impl From<&ApiConfig> for ClientConfig {
    fn from(api: &ApiConfig) -> Self {
        let mut config = Self::new(api.base_url.clone());
        config.timeout = api.timeout_secs.map(Duration::from_secs);
        if let Some(user_agent) = &api.user_agent {
            config.user_agent = user_agent.clone();
        }
        config
    }
}

/// Status and body of one HTTP exchange, before classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status returned by PagerDuty.
    pub status: StatusCode,
    /// Raw response body.
    pub body: String,
}

/// The client all PagerDuty operations are methods of.
///
/// Holds only immutable settings, the token provider and a `reqwest::Client`
/// (itself a cheap handle to a shared pool), so one instance can serve
/// concurrent operations from many tasks.
///
/// # Example
///
/// ```rust,no_run
/// use pagerduty_backend::api::PagerDutyClient;
/// use pagerduty_backend::api::client::ClientConfig;
/// use pagerduty_backend::auth::AuthCredential;
///
/// # async fn example() -> Result<(), pagerduty_backend::api::ApiError> {
/// let client = PagerDutyClient::new(
///     ClientConfig::default(),
///     AuthCredential::api_token("u+abc123"),
/// )?;
/// let policies = client.list_escalation_policies().await?;
/// println!("{} escalation policies", policies.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PagerDutyClient {
    /// The underlying HTTP client
    http: Client,
    /// Validated base URL
    base_url: Url,
    /// Source of credentials, asked before every request
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for PagerDutyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagerDutyClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PagerDutyClient {
    /// Creates a client from settings and a token provider.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL is not an absolute
    /// `http`/`https` URL or the HTTP client cannot be built.
    pub fn new(config: ClientConfig, tokens: impl TokenProvider + 'static) -> Result<Self, ApiError> {
        Self::with_provider(config, Arc::new(tokens))
    }

    /// Creates a client sharing an existing token provider.
    pub fn with_provider(
        config: ClientConfig,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    /// Creates a client from the `[api]` section of the configuration file.
    ///
    /// A token in the configuration is used as a static credential; otherwise
    /// the token is read from `PAGERDUTY_API_TOKEN` before every request.
    pub fn from_config(api: &ApiConfig) -> Result<Self, ApiError> {
        let config = ClientConfig::from(api);
        match &api.token {
            Some(token) => Self::new(config, AuthCredential::new(api.token_type, token.clone())),
            None => Self::new(config, EnvTokenProvider::new()),
        }
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Builds the URL for a path given as segments; each segment is escaped.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ApiError::Config(format!("base URL {} cannot carry a path", self.base_url))
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Issues one request and returns the raw status and body.
    ///
    /// This is the only place the network is touched. The credential is
    /// fetched from the provider immediately before sending.
    pub(crate) async fn send(
        &self,
        endpoint: &Endpoint,
        request: RequestBuilder,
    ) -> Result<RawResponse, ApiError> {
        let credential = self.tokens.credential().await?;

        let request = credential
            .apply_to_request(request)
            .header(ACCEPT, ACCEPT_HEADER)
            .header(CONTENT_TYPE, "application/json");

        let response = request
            .send()
            .await
            .map_err(|e| endpoint.transport_failure(e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| endpoint.transport_failure(e))?;

        tracing::debug!(action = endpoint.action, status = status.as_u16(), bytes = body.len(), "response received");

        Ok(RawResponse { status, body })
    }

    /// Classifies the status and decodes the body into `T`.
    pub(crate) fn decode<T: DeserializeOwned>(
        endpoint: &Endpoint,
        response: RawResponse,
    ) -> Result<T, ApiError> {
        if let Some(err) = endpoint.classify(response.status) {
            return Err(err);
        }

        serde_json::from_str(&response.body).map_err(|e| endpoint.parse_failure(e))
    }

    /// GET `segments` with query parameters and decode the response.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(segments)?;
        tracing::debug!(method = %Method::GET, %url, "sending request");

        let request = self.http.get(url).query(query);
        let response = self.send(endpoint, request).await?;
        Self::decode(endpoint, response)
    }

    /// POST a JSON body to `segments` and decode the response.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(segments)?;
        tracing::debug!(method = %Method::POST, %url, "sending request");

        let request = self.http.post(url).json(body);
        let response = self.send(endpoint, request).await?;
        Self::decode(endpoint, response)
    }
}

/// Validates a configured base URL.
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ApiError::Config(format!("invalid base URL {raw:?}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ApiError::Config(format!(
            "base URL {raw:?} must be an absolute http(s) URL"
        )));
    }

    Ok(url)
}
