//
//  pagerduty-backend
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Token acquisition and refresh belong to the host application. The client
//! only needs a [`TokenProvider`] it can ask for a credential before every
//! request; it never caches what it receives.
//!
//! ## Supported Credentials
//!
//! - **API token**: account or user REST API key, sent as `Token token=<key>`.
//! - **Bearer**: OAuth access token, sent as `Bearer <token>`.
//!
//! ## Example
//!
//! ```rust
//! use pagerduty_backend::auth::AuthCredential;
//!
//! let credential = AuthCredential::api_token("u+abc123");
//! assert_eq!(credential.header_value(), "Token token=u+abc123");
//! ```

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable read by [`EnvTokenProvider`].
pub const TOKEN_ENV_VAR: &str = "PAGERDUTY_API_TOKEN";

/// Errors raised while obtaining a credential.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No token is configured anywhere.
    #[error("No PagerDuty API token configured. Set PAGERDUTY_API_TOKEN or add `token` under [api] in the config file.")]
    Missing,

    /// The host's token provider failed.
    #[error("Failed to obtain PagerDuty API token: {0}")]
    Provider(String),
}

/// How a token is presented in the `Authorization` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// REST API key: `Token token=<key>`.
    #[default]
    ApiToken,
    /// OAuth access token: `Bearer <token>`.
    Bearer,
}

/// A credential ready to be attached to a request.
///
/// # Example
///
/// ```rust
/// use pagerduty_backend::auth::{AuthCredential, TokenKind};
///
/// let bearer = AuthCredential::new(TokenKind::Bearer, "oauth-token");
/// assert_eq!(bearer.header_value(), "Bearer oauth-token");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum AuthCredential {
    /// REST API key.
    ApiToken(String),
    /// OAuth access token.
    Bearer(String),
}

impl AuthCredential {
    /// Creates a credential of the given kind.
    pub fn new(kind: TokenKind, token: impl Into<String>) -> Self {
        match kind {
            TokenKind::ApiToken => Self::ApiToken(token.into()),
            TokenKind::Bearer => Self::Bearer(token.into()),
        }
    }

    /// Creates a REST API key credential.
    pub fn api_token(token: impl Into<String>) -> Self {
        Self::ApiToken(token.into())
    }

    /// Creates an OAuth bearer credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    /// Value of the `Authorization` header.
    pub fn header_value(&self) -> String {
        match self {
            Self::ApiToken(token) => format!("Token token={token}"),
            Self::Bearer(token) => format!("Bearer {token}"),
        }
    }

    /// Adds the `Authorization` header to a request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(reqwest::header::AUTHORIZATION, self.header_value())
    }
}

impl std::fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiToken(token) => write!(f, "ApiToken({})", mask_token(token)),
            Self::Bearer(token) => write!(f, "Bearer({})", mask_token(token)),
        }
    }
}

/// Masks all but the last four characters of a token.
///
/// ```rust
/// use pagerduty_backend::auth::mask_token;
///
/// assert_eq!(mask_token("abcdefgh1234"), "********1234");
/// assert_eq!(mask_token("abc"), "***");
/// ```
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

/// Supplies a credential before every request.
///
/// Implementations may refresh, rotate or look up tokens however they like;
/// the client calls [`TokenProvider::credential`] fresh each time.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns the credential to use for the next request.
    async fn credential(&self) -> Result<AuthCredential, AuthError>;
}

#[async_trait]
impl TokenProvider for AuthCredential {
    async fn credential(&self) -> Result<AuthCredential, AuthError> {
        Ok(self.clone())
    }
}

/// Reads the token from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvTokenProvider {
    var: String,
    kind: TokenKind,
}

impl EnvTokenProvider {
    /// Reads [`TOKEN_ENV_VAR`] as a REST API key.
    pub fn new() -> Self {
        Self::from_var(TOKEN_ENV_VAR, TokenKind::ApiToken)
    }

    /// Reads a custom variable.
    pub fn from_var(var: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            var: var.into(),
            kind,
        }
    }
}

impl Default for EnvTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenProvider for EnvTokenProvider {
    async fn credential(&self) -> Result<AuthCredential, AuthError> {
        match std::env::var(&self.var) {
            Ok(token) if !token.trim().is_empty() => {
                Ok(AuthCredential::new(self.kind, token.trim()))
            }
            _ => Err(AuthError::Missing),
        }
    }
}
