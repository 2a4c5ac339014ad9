// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use mp_config::{ProfileConfig, Resolved};
use mp_domain_types::ProfileVariant;
use mp_logging::{APP_NAME, CliLoggingArgs};
use mp_rest_client::NetworkConfig;
use serde_json::Value;
use tracing::debug;

pub mod show;
pub mod tui;

#[derive(clap::Parser, Debug)]
#[command(
    name = "merchant-profile",
    about = "View the merchant profile",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Extra configuration file, layered above the user file and environment
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(flatten)]
    pub logging: CliLoggingArgs,
    /// Base URL of the merchant service
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,
    /// Merchant whose profile is displayed
    #[arg(long, global = true)]
    pub merchant_id: Option<u64>,
    /// Field layout and demo record to use
    #[arg(long, value_enum, global = true)]
    pub variant: Option<ProfileVariant>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive profile screen (default)
    Tui,
    /// Load the profile once and print it
    Show(show::ShowArgs),
}

impl Commands {
    fn is_interactive(&self) -> bool {
        matches!(self, Commands::Tui)
    }
}

/// Typed views over the resolved configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub network: NetworkConfig,
    pub profile: ProfileConfig,
}

impl Settings {
    pub fn from_resolved(resolved: &Resolved) -> Result<Self> {
        Ok(Self {
            network: resolved.view().context("reading network settings")?,
            profile: resolved.view().context("reading profile settings")?,
        })
    }
}

impl Cli {
    /// Flags that override configuration keys, highest precedence layer
    pub fn config_overrides(&self) -> Vec<(&'static str, Value)> {
        let mut overrides = Vec::new();
        if let Some(url) = &self.base_url {
            overrides.push(("service-base-url", Value::from(url.as_str())));
        }
        if let Some(id) = self.merchant_id {
            overrides.push(("merchant-id", Value::from(id)));
        }
        if let Some(variant) = self.variant {
            overrides.push(("variant", Value::from(variant.to_string())));
        }
        if let Some(level) = self.logging.log_level {
            overrides.push(("log-level", Value::from(level.to_string())));
        }
        overrides
    }

    /// Merge every configuration layer for this invocation
    pub fn load_config(&self) -> Result<Resolved> {
        let paths = mp_config::paths::discover_paths(self.config.as_deref());
        mp_config::load_all(&paths, &self.config_overrides())
    }

    pub async fn run(self) -> Result<()> {
        let resolved = self.load_config()?;
        let settings = Settings::from_resolved(&resolved)?;
        let command = self.command.clone().unwrap_or(Commands::Tui);

        self.logging
            .init(APP_NAME, command.is_interactive(), settings.profile.log_level())?;
        debug!(?command, config = %resolved.json, "Configuration resolved");

        match command {
            Commands::Tui => tui::run(&settings).await,
            Commands::Show(args) => show::run(&settings, &args).await,
        }
    }
}

pub use clap::Parser;
