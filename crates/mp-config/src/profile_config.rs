// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Screen-level settings read from the merged configuration

use mp_domain_types::ProfileVariant;
use mp_logging::CliLogLevel;
use serde::Deserialize;
use std::time::Duration;

/// Redraw interval used when `tick-ms` is unset
pub const DEFAULT_TICK_MS: u64 = 100;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProfileConfig {
    pub variant: Option<ProfileVariant>,
    pub log_level: Option<CliLogLevel>,
    pub tick_ms: Option<u64>,
}

impl ProfileConfig {
    pub fn variant(&self) -> ProfileVariant {
        self.variant.unwrap_or_default()
    }

    pub fn log_level(&self) -> CliLogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.unwrap_or(DEFAULT_TICK_MS))
    }
}
