//
//  pagerduty-backend
//  api/common/status.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Per-endpoint status tables.
//!
//! PagerDuty documents a different subset of error statuses for every REST
//! endpoint. Instead of one generic mapper, each operation declares an
//! [`Endpoint`]: the verb phrase used in messages plus the statuses it gives
//! meaning to. Adding an operation means adding a table, not control flow.
//!
//! # Example
//!
//! ```rust
//! use pagerduty_backend::api::common::{Endpoint, ErrorKind, rules};
//! use reqwest::StatusCode;
//!
//! static GET_WIDGET: Endpoint = Endpoint {
//!     action: "get widget",
//!     resource: "widget",
//!     subject: "widget",
//!     rules: &[rules::UNAUTHENTICATED, rules::NOT_FOUND],
//! };
//!
//! let err = GET_WIDGET.classify(StatusCode::NOT_FOUND).unwrap();
//! assert_eq!(err.kind(), ErrorKind::NotFound);
//! assert_eq!(err.to_string(), "Failed to get widget. The requested resource was not found.");
//! assert!(GET_WIDGET.classify(StatusCode::OK).is_none());
//! ```

use std::fmt::Display;

use reqwest::StatusCode;

use super::{ApiError, ErrorKind};

/// Human-readable reasons appended to the endpoint's action phrase.
pub mod reasons {
    /// 400
    pub const INVALID_ARGUMENTS: &str = "Caller provided invalid arguments.";
    /// 400, for requests that will fail again unchanged
    pub const INVALID_ARGUMENTS_FINAL: &str = "Caller provided invalid arguments. Please review the response for error details. Retrying with the same arguments will not work.";
    /// 401
    pub const UNAUTHENTICATED: &str =
        "Caller did not supply credentials or did not provide the correct credentials.";
    /// 402
    pub const PAYMENT_REQUIRED: &str = "Account does not have the abilities to perform the action. Please review the response for the required abilities.";
    /// 403
    pub const UNAUTHORIZED: &str = "Caller is not authorized to view the requested resource.";
    /// 404
    pub const NOT_FOUND: &str = "The requested resource was not found.";
    /// 429, short form
    pub const RATE_LIMITED: &str = "Rate limit exceeded.";
    /// 429, long form
    pub const TOO_MANY_REQUESTS: &str =
        "Too many requests have been made, the rate limit has been reached.";
}

/// One row of a status table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRule {
    /// HTTP status code the rule matches.
    pub status: u16,
    /// Error kind produced for that status.
    pub kind: ErrorKind,
    /// Reason appended to `Failed to <action>.`
    pub reason: &'static str,
}

impl StatusRule {
    /// Creates a rule.
    pub const fn new(status: u16, kind: ErrorKind, reason: &'static str) -> Self {
        Self {
            status,
            kind,
            reason,
        }
    }
}

/// The rules shared by most endpoints.
pub mod rules {
    use super::{reasons, ErrorKind, StatusRule};

    pub const INVALID_ARGUMENTS: StatusRule =
        StatusRule::new(400, ErrorKind::InvalidArguments, reasons::INVALID_ARGUMENTS);
    pub const INVALID_ARGUMENTS_FINAL: StatusRule = StatusRule::new(
        400,
        ErrorKind::InvalidArguments,
        reasons::INVALID_ARGUMENTS_FINAL,
    );
    pub const UNAUTHENTICATED: StatusRule =
        StatusRule::new(401, ErrorKind::Unauthenticated, reasons::UNAUTHENTICATED);
    pub const PAYMENT_REQUIRED: StatusRule =
        StatusRule::new(402, ErrorKind::PaymentRequired, reasons::PAYMENT_REQUIRED);
    pub const UNAUTHORIZED: StatusRule =
        StatusRule::new(403, ErrorKind::Unauthorized, reasons::UNAUTHORIZED);
    pub const NOT_FOUND: StatusRule = StatusRule::new(404, ErrorKind::NotFound, reasons::NOT_FOUND);
    pub const RATE_LIMITED: StatusRule =
        StatusRule::new(429, ErrorKind::RateLimited, reasons::RATE_LIMITED);
    pub const TOO_MANY_REQUESTS: StatusRule =
        StatusRule::new(429, ErrorKind::RateLimited, reasons::TOO_MANY_REQUESTS);
}

/// Declarative description of one operation's error surface.
///
/// # Fields
///
/// | Field | Used in |
/// |-------|---------|
/// | `action` | `Failed to <action>. <reason>` |
/// | `resource` | `Failed to retrieve <resource>: <transport error>` |
/// | `subject` | `Failed to parse <subject> information: <decode error>` |
/// | `rules` | status → kind → reason |
#[derive(Debug)]
pub struct Endpoint {
    /// Verb phrase, e.g. `list escalation policies`.
    pub action: &'static str,
    /// What a transport failure was retrieving.
    pub resource: &'static str,
    /// What a parse failure was decoding.
    pub subject: &'static str,
    /// Statuses this endpoint gives meaning to.
    pub rules: &'static [StatusRule],
}

impl Endpoint {
    /// Formats `Failed to <action>. <reason>`.
    pub fn message(&self, reason: &str) -> String {
        format!("Failed to {}. {}", self.action, reason)
    }

    /// Finds the rule for `status`, if the table has one.
    pub fn rule(&self, status: u16) -> Option<&StatusRule> {
        self.rules.iter().find(|rule| rule.status == status)
    }

    /// Maps a response status to an error.
    ///
    /// Returns `None` for success statuses. Non-success statuses missing from
    /// the table become [`ApiError::Unexpected`] with the original code.
    pub fn classify(&self, status: StatusCode) -> Option<ApiError> {
        if status.is_success() {
            return None;
        }

        let code = status.as_u16();
        let err = match self.rule(code) {
            Some(rule) => ApiError::from_kind(rule.kind, code, self.message(rule.reason)),
            None => ApiError::Unexpected {
                status: code,
                message: self.message(&format!("Unexpected response status {status}.")),
            },
        };

        tracing::debug!(action = self.action, status = code, kind = ?err.kind(), "classified response");
        Some(err)
    }

    /// Not-found synthesized locally, e.g. for an empty search result.
    pub fn not_found(&self) -> ApiError {
        ApiError::NotFound(self.message(reasons::NOT_FOUND))
    }

    /// Invalid-arguments synthesized locally, before any request is sent.
    pub fn invalid_arguments(&self) -> ApiError {
        ApiError::InvalidArguments(self.message(reasons::INVALID_ARGUMENTS))
    }

    /// Wraps a decode failure; always reported as a server-side error.
    pub fn parse_failure(&self, err: impl Display) -> ApiError {
        ApiError::Parse(format!("Failed to parse {} information: {}", self.subject, err))
    }

    /// Wraps a transport failure.
    pub fn transport_failure(&self, source: reqwest::Error) -> ApiError {
        ApiError::Network {
            message: format!("Failed to retrieve {}", self.resource),
            source,
        }
    }
}
