// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Typed views over the merged configuration

use serde::de::DeserializeOwned;
use serde_json::Value as J;

/// Extract the root configuration as a typed value
pub fn get<T: DeserializeOwned>(root: &J) -> anyhow::Result<T> {
    serde_path_to_error::deserialize(root.clone())
        .map_err(|e| anyhow::anyhow!("Config extraction failed at '{}': {}", e.path(), e.inner()))
}
