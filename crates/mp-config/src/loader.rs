// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! TOML loading and JSON Schema validation

use anyhow::{Context, Result};
use serde_json::Value as J;
use std::path::Path;

use crate::schema::SchemaRoot;

/// Parse a TOML document into JSON for validation and merging
pub fn parse_toml_to_json(toml_str: &str) -> Result<J> {
    let toml: toml::Value = toml_str.parse::<toml::Value>()?;
    Ok(serde_json::to_value(toml)?)
}

/// JSON Schema generated from `SchemaRoot`
pub fn schema_json() -> Result<J> {
    Ok(serde_json::to_value(schemars::schema_for!(SchemaRoot))?)
}

/// Validate a layer (or the merged result) against the configuration schema
pub fn validate_against_schema(v: &J) -> Result<()> {
    use jsonschema::{Draft, JSONSchema};

    let schema = schema_json()?;
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft202012)
        .compile(&schema)
        .map_err(|e| anyhow::anyhow!("invalid configuration schema: {e}"))?;

    if let Err(errors) = validator.validate(v) {
        let error_msg = errors.map(|e| e.to_string()).collect::<Vec<_>>().join("\n  - ");
        anyhow::bail!("Config schema validation failed:\n  - {}", error_msg);
    }

    Ok(())
}

/// Read, parse and validate one configuration file
pub fn read_layer_from_file(path: &Path) -> Result<J> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;

    let json = parse_toml_to_json(&content)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    validate_against_schema(&json)
        .with_context(|| format!("validating config file {}", path.display()))?;

    Ok(json)
}
