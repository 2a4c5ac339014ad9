// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Network configuration types

use serde::{Deserialize, Serialize};

/// Service the profile screen reads from when nothing else is configured
pub const DEFAULT_SERVICE_BASE_URL: &str = "https://spareshive-api-1523959fece7.herokuapp.com";

/// Merchant shown when nothing else is configured
pub const DEFAULT_MERCHANT_ID: u64 = 6;

/// Network configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Merchant service base URL
    #[serde(rename = "service-base-url")]
    pub service_base_url: Option<String>,
    /// Identifier of the merchant whose profile is displayed
    #[serde(rename = "merchant-id")]
    pub merchant_id: Option<u64>,
}

impl NetworkConfig {
    pub fn service_base_url(&self) -> &str {
        self.service_base_url.as_deref().unwrap_or(DEFAULT_SERVICE_BASE_URL)
    }

    pub fn merchant_id(&self) -> u64 {
        self.merchant_id.unwrap_or(DEFAULT_MERCHANT_ID)
    }
}
