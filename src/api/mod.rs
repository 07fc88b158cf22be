//
//  pagerduty-backend
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to the PagerDuty REST API v2 for a developer-portal backend.
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: Transport; one request per call, fixed headers, fresh token
//! - [`common`]: Errors, per-endpoint status tables and pagination
//! - [`types`]: Response DTOs
//! - [`shaping`]: Post-processing of decoded results
//! - `endpoints`: The operations themselves, as methods on [`PagerDutyClient`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pagerduty_backend::api::PagerDutyClient;
//! use pagerduty_backend::api::client::ClientConfig;
//! use pagerduty_backend::auth::EnvTokenProvider;
//!
//! # async fn example() -> Result<(), pagerduty_backend::api::ApiError> {
//! let client = PagerDutyClient::new(ClientConfig::default(), EnvTokenProvider::new())?;
//!
//! for user in client.oncall_users("PEP1234").await? {
//!     println!("{} <{}>", user.name, user.email.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns one value or one [`ApiError`]. Which statuses map
//! to which kind is declared per operation:
//!
//! - `InvalidArguments`: 400
//! - `Unauthenticated`: 401
//! - `PaymentRequired`: 402
//! - `Unauthorized`: 403
//! - `NotFound`: 404
//! - `RateLimited`: 429
//! - `Unexpected`: any other non-success status
//! - `Parse`: body did not decode, reported as 500
//! - `Network`: no response at all

/// Transport wrapper around `reqwest`.
pub mod client;

/// Errors, status tables and pagination shared by every operation.
pub mod common;

/// Operations on [`PagerDutyClient`].
mod endpoints;

/// Pure reshaping of decoded results.
pub mod shaping;

/// PagerDuty resource types.
pub mod types;

#[cfg(test)]
mod testing;

pub use client::PagerDutyClient;
pub use common::{ApiError, ErrorKind};
pub use endpoints::RECENT_CHANGE_EVENTS;
