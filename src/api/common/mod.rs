//
//  pagerduty-backend
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the PagerDuty Client
//!
//! This module provides the shared pieces every endpoint is built from: the
//! error type, the per-endpoint status tables, the pagination drainer and the
//! lightweight reference object PagerDuty embeds inside other resources.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ErrorKind`] - Coarse classification of an [`ApiError`]
//! - [`Endpoint`] - Declarative status table for one operation
//! - [`Paginator`] - Offset/limit pagination with two termination strategies
//! - [`Reference`] - Pointer object (`{id, type, summary, self, html_url}`)
//!
//! # Example
//!
//! ```rust
//! use pagerduty_backend::api::common::{ApiError, ErrorKind};
//!
//! fn describe(err: &ApiError) -> &'static str {
//!     match err.kind() {
//!         ErrorKind::Unauthenticated | ErrorKind::Unauthorized => "check your token",
//!         ErrorKind::RateLimited => "slow down",
//!         _ => "something else went wrong",
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::AuthError;

mod pagination;
mod status;

pub use pagination::*;
pub use status::*;

/// Coarse classification of an [`ApiError`].
///
/// Status-mapped kinds correspond one-to-one with the HTTP codes PagerDuty
/// documents for its REST endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// HTTP 400
    InvalidArguments,
    /// HTTP 401
    Unauthenticated,
    /// HTTP 402
    PaymentRequired,
    /// HTTP 403
    Unauthorized,
    /// HTTP 404, or an empty search result
    NotFound,
    /// HTTP 429
    RateLimited,
    /// Body could not be decoded into the expected shape
    Parse,
    /// A non-success status the endpoint does not enumerate
    Unexpected,
    /// Connection, DNS or timeout failure before any response
    Network,
    /// The token provider could not produce a credential
    Auth,
    /// The client was constructed with unusable settings
    Config,
}

impl ErrorKind {
    /// The HTTP status code this kind stands for, when it has one.
    pub fn status_code(self) -> Option<u16> {
        match self {
            Self::InvalidArguments => Some(400),
            Self::Unauthenticated => Some(401),
            Self::PaymentRequired => Some(402),
            Self::Unauthorized => Some(403),
            Self::NotFound => Some(404),
            Self::RateLimited => Some(429),
            Self::Parse => Some(500),
            Self::Unexpected | Self::Network | Self::Auth | Self::Config => None,
        }
    }
}

/// Unified error type for all PagerDuty API operations.
///
/// Every operation either returns its normalized result or exactly one
/// `ApiError`. Pagination never yields partial results alongside an error.
///
/// # Variants
///
/// | Variant | Origin | Code |
/// |---------|--------|------|
/// | `InvalidArguments` | upstream status or local validation | 400 |
/// | `Unauthenticated` | upstream status | 401 |
/// | `PaymentRequired` | upstream status | 402 |
/// | `Unauthorized` | upstream status | 403 |
/// | `NotFound` | upstream status or empty search result | 404 |
/// | `RateLimited` | upstream status | 429 |
/// | `Parse` | body did not match the expected shape | 500 |
/// | `Unexpected` | status outside the endpoint's table | the upstream status |
/// | `Network` | transport failure | none |
/// | `Auth` | token provider failure | none |
/// | `Config` | invalid client configuration | none |
///
/// # Example
///
/// ```rust
/// use pagerduty_backend::api::common::ApiError;
///
/// let err = ApiError::NotFound("Failed to get service. The requested resource was not found.".into());
/// assert_eq!(err.status_code(), Some(404));
/// assert!(!err.is_retryable());
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// The caller supplied invalid arguments.
    #[error("{0}")]
    InvalidArguments(String),

    /// Missing or wrong credentials.
    #[error("{0}")]
    Unauthenticated(String),

    /// The account lacks the plan ability the endpoint requires.
    #[error("{0}")]
    PaymentRequired(String),

    /// The credentials are valid but may not view the resource.
    #[error("{0}")]
    Unauthorized(String),

    /// The resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// PagerDuty rejected the request because of its rate limit.
    #[error("{0}")]
    RateLimited(String),

    /// The response body could not be decoded.
    #[error("{0}")]
    Parse(String),

    /// A non-success status that the endpoint has no rule for.
    #[error("{message}")]
    Unexpected {
        /// The upstream HTTP status code
        status: u16,
        /// Human-readable description
        message: String,
    },

    /// A network-level error occurred before a response was received.
    #[error("{message}: {source}")]
    Network {
        /// What the client was trying to retrieve
        message: String,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The token provider failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The client configuration is unusable.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Builds the error for a response with the given status and kind.
    ///
    /// Kinds that cannot originate from a response fall back to
    /// [`ApiError::Unexpected`] carrying `status`.
    pub(crate) fn from_kind(kind: ErrorKind, status: u16, message: String) -> Self {
        match kind {
            ErrorKind::InvalidArguments => Self::InvalidArguments(message),
            ErrorKind::Unauthenticated => Self::Unauthenticated(message),
            ErrorKind::PaymentRequired => Self::PaymentRequired(message),
            ErrorKind::Unauthorized => Self::Unauthorized(message),
            ErrorKind::NotFound => Self::NotFound(message),
            ErrorKind::RateLimited => Self::RateLimited(message),
            ErrorKind::Parse => Self::Parse(message),
            ErrorKind::Unexpected | ErrorKind::Network | ErrorKind::Auth | ErrorKind::Config => {
                Self::Unexpected { status, message }
            }
        }
    }

    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArguments(_) => ErrorKind::InvalidArguments,
            Self::Unauthenticated(_) => ErrorKind::Unauthenticated,
            Self::PaymentRequired(_) => ErrorKind::PaymentRequired,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::RateLimited(_) => ErrorKind::RateLimited,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Unexpected { .. } => ErrorKind::Unexpected,
            Self::Network { .. } => ErrorKind::Network,
            Self::Auth(_) => ErrorKind::Auth,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// The HTTP status code associated with this error.
    ///
    /// Parse failures report 500 whatever the upstream status was, since the
    /// response violated its contract. Transport, token and configuration
    /// failures have no code.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unexpected { status, .. } => Some(*status),
            other => other.kind().status_code(),
        }
    }

    /// Whether repeating the identical request could succeed.
    ///
    /// The client itself never retries; this is a hint for the caller's own
    /// retry policy. Invalid arguments are never retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited(_) | Self::Network { .. } => true,
            Self::Unexpected { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Pointer object PagerDuty embeds in other resources.
///
/// The API returns these as `{"id", "type", "summary", "self", "html_url"}`
/// whenever a related resource is not expanded through `include[]`.
///
/// # Example
///
/// ```rust
/// use pagerduty_backend::api::common::Reference;
///
/// let json = r#"{"id": "PSVC1", "type": "service_reference", "summary": "Checkout"}"#;
/// let r: Reference = serde_json::from_str(json).unwrap();
/// assert_eq!(r.summary.as_deref(), Some("Checkout"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Identifier of the referenced resource.
    pub id: String,

    /// Resource type, e.g. `service_reference`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Short human-readable description.
    #[serde(default)]
    pub summary: Option<String>,

    /// API URL of the referenced resource.
    #[serde(default, rename = "self")]
    pub self_url: Option<String>,

    /// Web UI URL of the referenced resource.
    #[serde(default)]
    pub html_url: Option<String>,
}
