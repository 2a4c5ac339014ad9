// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Canonical shape of the configuration.
//!
//! `SchemaRoot` is only used to generate the JSON Schema every layer is
//! validated against. Code reads configuration through typed views such as
//! `ProfileConfig` or the REST client's `NetworkConfig`.

use mp_domain_types::ProfileVariant;
use mp_logging::CliLogLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct SchemaRoot {
    /// Base URL of the merchant service
    pub service_base_url: Option<String>,

    /// Merchant whose profile is shown
    pub merchant_id: Option<u64>,

    /// Field layout and demo record
    pub variant: Option<ProfileVariant>,

    /// Default log level when neither `--log-level` nor `RUST_LOG` is set
    pub log_level: Option<CliLogLevel>,

    /// Redraw interval of the interactive screen, in milliseconds
    #[schemars(range(min = 10, max = 1000))]
    pub tick_ms: Option<u64>,
}

impl SchemaRoot {
    /// Top-level keys accepted in any layer
    pub const KEYS: &'static [&'static str] =
        &["service-base-url", "merchant-id", "variant", "log-level", "tick-ms"];
}
