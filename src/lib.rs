//
//  pagerduty-backend
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # PagerDuty Backend Library
//!
//! A typed client layer over the PagerDuty REST API v2, built for a
//! developer-portal backend that shows on-call, service and incident data.
//!
//! ## Overview
//!
//! Each operation issues one or more authenticated requests, maps every
//! documented error status to a typed [`api::ApiError`], decodes the body
//! into domain types and applies any post-processing, such as resolving the
//! users currently on call.
//!
//! ## Features
//!
//! - **Escalation policies**: full paginated listing
//! - **On-call**: lowest-level responders of a policy, sorted and unique
//! - **Services**: by id, by integration key, or the full listing
//! - **Incidents & change events**: open incidents and recent changes of a service
//! - **Analytics**: abilities, service standards and 30-day incident metrics
//!
//! ## Module Structure
//!
//! - [`api`]: Client, operations, errors, pagination and types
//! - [`auth`]: Credentials and token providers
//! - [`config`]: Configuration file management
//! - [`cli`]: The `pd` command-line host
//! - [`output`]: JSON output
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pagerduty_backend::{Config, PagerDutyClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut config = Config::load()?;
//! config.apply_env();
//!
//! let client = PagerDutyClient::from_config(&config.api)?;
//! let service = client.service_by_id("PSVC123").await?;
//! println!("{} is {}", service.name, service.status.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// PagerDuty REST API client.
///
/// Handles authentication headers, status mapping, pagination and decoding.
pub mod api;

/// Credentials and token providers.
pub mod auth;

/// Configuration file management.
///
/// Manages the configuration stored in platform-specific locations:
/// - Linux: `~/.config/pd/config.toml`
/// - macOS: `~/Library/Application Support/pd/config.toml`
/// - Windows: `%APPDATA%\pd\config.toml`
pub mod config;

/// JSON output for the CLI.
pub mod output;

pub use api::{ApiError, PagerDutyClient};
pub use cli::Cli;
pub use config::Config;

/// Application name, used for the binary and configuration paths.
pub const APP_NAME: &str = "pd";

/// Application version, from Cargo.toml.
///
/// ```rust
/// use pagerduty_backend::VERSION;
///
/// println!("pd version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1`: General errors
/// - `2`: Invalid usage, reported by clap before any command runs
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    use crate::api::{ApiError, ErrorKind};

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Missing, invalid or insufficient credentials.
    ///
    /// Set `PAGERDUTY_API_TOKEN` or `api.token` in the configuration file.
    pub const AUTH_ERROR: i32 = 4;

    /// The service, policy or other resource does not exist.
    pub const NOT_FOUND: i32 = 8;

    /// PagerDuty rate limit exceeded. Wait before retrying.
    pub const RATE_LIMIT: i32 = 32;

    /// Exit code for a failed API operation.
    ///
    /// ```rust
    /// use pagerduty_backend::{exit_codes, ApiError};
    ///
    /// let err = ApiError::NotFound("Failed to get service.".into());
    /// assert_eq!(exit_codes::for_error(&err), exit_codes::NOT_FOUND);
    /// ```
    pub fn for_error(err: &ApiError) -> i32 {
        match err.kind() {
            ErrorKind::Unauthenticated | ErrorKind::Unauthorized | ErrorKind::Auth => AUTH_ERROR,
            ErrorKind::NotFound => NOT_FOUND,
            ErrorKind::RateLimited => RATE_LIMIT,
            _ => ERROR,
        }
    }
}
