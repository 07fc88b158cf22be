//
//  pagerduty-backend
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads and saves the settings the PagerDuty client is built from. They
//! live in a TOML file in the platform-specific configuration directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/pd/config.toml`
//! - **macOS**: `~/Library/Application Support/pd/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\pd\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [api]
//! base_url = "https://api.eu.pagerduty.com"
//! token = "u+abcdefg"
//! token_type = "api_token"
//! timeout_secs = 30
//! ```
//!
//! ## Precedence
//!
//! Command-line flags, then environment variables, then the file, then
//! built-in defaults.
//!
//! | Setting | Environment variable |
//! |---------|----------------------|
//! | `api.base_url` | `PAGERDUTY_API_BASE_URL` |
//! | `api.token` | `PAGERDUTY_API_TOKEN` |

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::client::DEFAULT_BASE_URL;
use crate::auth::{mask_token, TokenKind, TOKEN_ENV_VAR};

/// Environment variable overriding `api.base_url`.
pub const BASE_URL_ENV_VAR: &str = "PAGERDUTY_API_BASE_URL";

/// Top-level configuration file.
///
/// # Examples
///
/// ```rust
/// use pagerduty_backend::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.api.base_url, "https://api.pagerduty.com");
/// assert!(config.api.token.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// PagerDuty REST API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// The `[api]` section.
///
/// # Default Values
///
/// | Field | Default |
/// |-------|---------|
/// | `base_url` | `https://api.pagerduty.com` |
/// | `token` | `None` (read from `PAGERDUTY_API_TOKEN` per request) |
/// | `token_type` | `api_token` |
/// | `timeout_secs` | `None` (no timeout) |
/// | `user_agent` | `None` (`pd/<version>`) |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// REST API location; EU accounts use `https://api.eu.pagerduty.com`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Static token. Prefer the environment variable over storing it here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// How the token is presented in the `Authorization` header.
    #[serde(default)]
    pub token_type: TokenKind,

    /// Per-request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Overrides the `User-Agent` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            token_type: TokenKind::default(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ApiConfig {
    /// The same settings with the token masked, for display.
    pub fn redacted(&self) -> Self {
        Self {
            token: self.token.as_deref().map(mask_token),
            ..self.clone()
        }
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed, or holds an
    /// unusable base URL.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Applies explicit overrides on top of the loaded values.
    ///
    /// `None` leaves a setting untouched.
    pub fn apply_overrides(&mut self, base_url: Option<String>, token: Option<String>) {
        if let Some(base_url) = base_url.filter(|v| !v.trim().is_empty()) {
            self.api.base_url = base_url;
        }
        if let Some(token) = token.filter(|v| !v.trim().is_empty()) {
            self.api.token = Some(token);
        }
    }

    /// Applies `PAGERDUTY_API_BASE_URL` and `PAGERDUTY_API_TOKEN`.
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(BASE_URL_ENV_VAR).ok(),
            std::env::var(TOKEN_ENV_VAR).ok(),
        );
    }

    /// Reads a setting by key; `api.` prefix optional.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let api = &self.api;
        Ok(match normalize_key(key)? {
            "base_url" => Some(api.base_url.clone()),
            "token" => api.token.clone(),
            "token_type" => Some(token_kind_name(api.token_type).to_string()),
            "timeout_secs" => api.timeout_secs.map(|v| v.to_string()),
            "user_agent" => api.user_agent.clone(),
            other => anyhow::bail!("Unknown configuration key '{other}'"),
        })
    }

    /// Changes a setting by key; `api.` prefix optional.
    ///
    /// # Errors
    ///
    /// Fails for unknown keys and values that do not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match normalize_key(key)? {
            "base_url" => self.api.base_url = value.trim().to_string(),
            "token" => self.api.token = Some(value.to_string()),
            "token_type" => {
                self.api.token_type = match value {
                    "api_token" => TokenKind::ApiToken,
                    "bearer" => TokenKind::Bearer,
                    other => anyhow::bail!(
                        "Invalid token_type '{other}'. Expected 'api_token' or 'bearer'"
                    ),
                }
            }
            "timeout_secs" => {
                let secs = value
                    .parse()
                    .with_context(|| format!("Invalid timeout_secs '{value}'"))?;
                self.api.timeout_secs = Some(secs);
            }
            "user_agent" => self.api.user_agent = Some(value.to_string()),
            other => anyhow::bail!("Unknown configuration key '{other}'"),
        }
        self.validate()
    }

    /// Resets a setting to its default.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match normalize_key(key)? {
            "base_url" => self.api.base_url = default_base_url(),
            "token" => self.api.token = None,
            "token_type" => self.api.token_type = TokenKind::default(),
            "timeout_secs" => self.api.timeout_secs = None,
            "user_agent" => self.api.user_agent = None,
            other => anyhow::bail!("Unknown configuration key '{other}'"),
        }
        Ok(())
    }

    /// Checks that the base URL is an absolute `http(s)` URL.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid api.base_url {:?}", self.api.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("api.base_url must use http or https, got {:?}", url.scheme());
        }
        Ok(())
    }
}

/// Keys accepted by [`Config::get`], [`Config::set`] and [`Config::unset`].
pub const KEYS: &[&str] = &["base_url", "token", "token_type", "timeout_secs", "user_agent"];

fn normalize_key(key: &str) -> Result<&'static str> {
    let bare = key.strip_prefix("api.").unwrap_or(key);
    KEYS.iter()
        .copied()
        .find(|k| *k == bare)
        .ok_or_else(|| {
            anyhow::anyhow!("Unknown configuration key '{key}'. Valid keys: {}", KEYS.join(", "))
        })
}

fn token_kind_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::ApiToken => "api_token",
        TokenKind::Bearer => "bearer",
    }
}
