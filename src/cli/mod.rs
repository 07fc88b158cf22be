//
//  pagerduty-backend
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod config;
mod query;

pub use config::ConfigCommand;
pub use query::QueryCommand;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::PagerDutyClient;
use crate::auth::TokenKind;
use crate::config::Config;
use crate::output::JsonStyle;

/// pd - Query PagerDuty from the command line
#[derive(Parser, Debug)]
#[command(
    name = "pd",
    version,
    about = "Query PagerDuty from the command line",
    long_about = "pd reads services, on-call responders, incidents and change events\n\
                  from the PagerDuty REST API and prints them as JSON.",
    propagate_version = true,
    after_help = "Use 'pd <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// PagerDuty REST API base URL
    #[arg(long, global = true, env = "PAGERDUTY_API_BASE_URL")]
    pub base_url: Option<String>,

    /// PagerDuty API token
    #[arg(long, global = true, env = "PAGERDUTY_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Send the token as an OAuth bearer token
    #[arg(long, global = true)]
    pub bearer: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Configuration file to use instead of the default location
    #[arg(long = "config", global = true, env = "PD_CONFIG", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,
}

impl GlobalOptions {
    /// Path of the configuration file in effect.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config_file {
            Some(path) => Ok(path.clone()),
            None => Config::config_path(),
        }
    }

    /// Loads the configuration file without applying flags.
    pub fn load_file(&self) -> Result<Config> {
        Config::load_from(&self.config_path()?)
    }

    /// Configuration with flags and environment applied on top of the file.
    pub fn effective_config(&self) -> Result<Config> {
        let mut config = self.load_file()?;
        config.apply_overrides(self.base_url.clone(), self.token.clone());
        if self.bearer {
            config.api.token_type = TokenKind::Bearer;
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_secs = Some(timeout);
        }
        config.validate()?;
        Ok(config)
    }

    /// Client built from the effective configuration.
    pub fn client(&self) -> Result<PagerDutyClient> {
        let config = self.effective_config()?;
        tracing::debug!(base_url = %config.api.base_url, "creating client");
        Ok(PagerDutyClient::from_config(&config.api)?)
    }

    /// JSON layout selected by `--compact`.
    pub fn json_style(&self) -> JsonStyle {
        if self.compact {
            JsonStyle::Compact
        } else {
            JsonStyle::Pretty
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Query(QueryCommand),

    /// Show or change configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"https://api.eu.pagerduty.com\"\ntoken = \"file\"\n")
            .unwrap();

        let global = GlobalOptions {
            config_file: Some(path),
            token: Some("flag".into()),
            bearer: true,
            timeout: Some(5),
            ..Default::default()
        };

        let config = global.effective_config().unwrap();
        assert_eq!(config.api.base_url, "https://api.eu.pagerduty.com");
        assert_eq!(config.api.token.as_deref(), Some("flag"));
        assert_eq!(config.api.token_type, TokenKind::Bearer);
        assert_eq!(config.api.timeout_secs, Some(5));
    }

    #[test]
    fn test_bad_base_url_flag_rejected() {
        let dir = TempDir::new().unwrap();
        let global = GlobalOptions {
            config_file: Some(dir.path().join("missing.toml")),
            base_url: Some("ftp://example.com".into()),
            ..Default::default()
        };
        assert!(global.effective_config().is_err());
    }
}
