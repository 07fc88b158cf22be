//
//  pagerduty-backend
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! `pd config` without a subcommand prints the effective configuration,
//! file plus environment plus flags, with the token masked.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::auth::mask_token;
use crate::output::write_json;

use super::GlobalOptions;

/// Show or change configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: Option<ConfigSubcommand>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show the effective configuration
    Show,

    /// Get a value from the configuration file
    Get(GetArgs),

    /// Set a value in the configuration file
    Set(SetArgs),

    /// Reset a value in the configuration file to its default
    Unset(UnsetArgs),

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key, e.g. base_url
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key, e.g. base_url
    pub key: String,

    /// Configuration value
    pub value: String,
}

#[derive(Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key, e.g. timeout_secs
    pub key: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            None | Some(ConfigSubcommand::Show) => self.show(global),
            Some(ConfigSubcommand::Get(args)) => self.get(args, global),
            Some(ConfigSubcommand::Set(args)) => self.set(args, global),
            Some(ConfigSubcommand::Unset(args)) => self.unset(args, global),
            Some(ConfigSubcommand::Path) => self.path(global),
        }
    }

    fn show(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.effective_config()?;
        write_json(&config.api.redacted(), global.json_style())
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let config = global.load_file()?;
        let value = config.get(&args.key)?;
        let value = if args.key.ends_with("token") {
            value.as_deref().map(mask_token)
        } else {
            value
        };

        match value {
            Some(value) => println!("{value}"),
            None => println!(),
        }
        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let path = global.config_path()?;
        let mut config = global.load_file()?;
        config.set(&args.key, &args.value)?;
        config.save_to(&path)?;
        tracing::debug!(key = %args.key, path = %path.display(), "configuration updated");
        Ok(())
    }

    fn unset(&self, args: &UnsetArgs, global: &GlobalOptions) -> Result<()> {
        let path = global.config_path()?;
        let mut config = global.load_file()?;
        config.unset(&args.key)?;
        config.save_to(&path)?;
        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        println!("{}", global.config_path()?.display());
        Ok(())
    }
}
