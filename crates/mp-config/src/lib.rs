// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Layered configuration for the merchant profile tools.
//!
//! Every layer is parsed to JSON, validated against the schema generated
//! from `SchemaRoot`, and merged in precedence order:
//! built-in defaults < user file < `MP_*` environment < `--config` file < flags.
//! Consumers read the result through typed views (`ProfileConfig`, the REST
//! client's `NetworkConfig`) extracted with `serde_path_to_error`.

pub mod env;
pub mod extract;
pub mod loader;
pub mod merge;
pub mod paths;
pub mod profile_config;
pub mod schema;

pub use profile_config::{DEFAULT_TICK_MS, ProfileConfig};
pub use schema::SchemaRoot;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value as J;
use tracing::debug;

/// Final merged configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub json: J,
}

impl Resolved {
    /// Typed view over the whole configuration
    pub fn view<T: DeserializeOwned>(&self) -> Result<T> {
        extract::get(&self.json)
    }
}

/// Load and merge all layers using the process environment
pub fn load_all(paths: &paths::Paths, flag_sets: &[(&str, J)]) -> Result<Resolved> {
    load_all_with_env(paths, env::env_overlay()?, flag_sets)
}

/// Load and merge all layers with an explicit environment overlay
pub fn load_all_with_env(
    paths: &paths::Paths,
    env_layer: J,
    flag_sets: &[(&str, J)],
) -> Result<Resolved> {
    // Built-in defaults live in the typed views; the merge starts empty.
    let mut json = serde_json::json!({});

    if paths.user.exists() {
        debug!(path = %paths.user.display(), "Loading user config");
        merge::merge_two_json(&mut json, loader::read_layer_from_file(&paths.user)?);
    }

    merge::merge_two_json(&mut json, env_layer);

    if let Some(cli_config) = &paths.cli_config {
        debug!(path = %cli_config.display(), "Loading --config file");
        merge::merge_two_json(&mut json, loader::read_layer_from_file(cli_config)?);
    }

    merge::merge_two_json(&mut json, env::flags_overlay(flag_sets));

    loader::validate_against_schema(&json).context("validating merged configuration")?;

    Ok(Resolved { json })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mp_domain_types::ProfileVariant;
    use serde_json::json;
    use std::time::Duration;
    use tempfile::TempDir;

    fn paths_in(dir: &TempDir, user: Option<&str>, cli: Option<&str>) -> paths::Paths {
        let user_path = dir.path().join("config.toml");
        if let Some(content) = user {
            std::fs::write(&user_path, content).unwrap();
        }
        let cli_config = cli.map(|content| {
            let path = dir.path().join("cli.toml");
            std::fs::write(&path, content).unwrap();
            path
        });
        paths::Paths {
            user: user_path,
            cli_config,
        }
    }

    #[test]
    fn empty_layers_give_defaults() {
        let dir = TempDir::new().unwrap();
        let resolved = load_all_with_env(&paths_in(&dir, None, None), json!({}), &[]).unwrap();

        let config: ProfileConfig = resolved.view().unwrap();
        assert_eq!(config.variant(), ProfileVariant::Business);
        assert_eq!(config.tick(), Duration::from_millis(DEFAULT_TICK_MS));
    }

    #[test]
    fn precedence_is_user_env_cli_flags() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(
            &dir,
            Some(
                r#"
                service-base-url = "http://user"
                merchant-id = 1
                variant = "generic"
                tick-ms = 40
                "#,
            ),
            Some(
                r#"
                merchant-id = 3
                "#,
            ),
        );
        let env = json!({"service-base-url": "http://env", "merchant-id": 2});
        let flags = [("merchant-id", json!(4))];

        let resolved = load_all_with_env(&paths, env, &[]).unwrap();
        assert_eq!(resolved.json["service-base-url"], "http://env");
        assert_eq!(resolved.json["merchant-id"], 3);
        assert_eq!(resolved.json["variant"], "generic");
        assert_eq!(resolved.json["tick-ms"], 40);

        let env = json!({"service-base-url": "http://env", "merchant-id": 2});
        let resolved = load_all_with_env(&paths, env, &flags).unwrap();
        assert_eq!(resolved.json["merchant-id"], 4);
    }

    #[test]
    fn invalid_user_file_is_reported_with_path() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(&dir, Some("variant = \"retail\""), None);

        let err = load_all_with_env(&paths, json!({}), &[]).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn missing_cli_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let paths = paths::Paths {
            user: dir.path().join("absent.toml"),
            cli_config: Some(dir.path().join("nope.toml")),
        };

        assert!(load_all_with_env(&paths, json!({}), &[]).is_err());
    }

    #[test]
    fn bad_env_value_fails_merged_validation() {
        let dir = TempDir::new().unwrap();
        let env = json!({"merchant-id": "six"});

        assert!(load_all_with_env(&paths_in(&dir, None, None), env, &[]).is_err());
    }

    #[test]
    fn view_ignores_keys_it_does_not_name() {
        let resolved = Resolved {
            json: json!({"service-base-url": "http://x", "log-level": "debug"}),
        };
        let config: ProfileConfig = resolved.view().unwrap();
        assert_eq!(config.log_level(), mp_logging::CliLogLevel::Debug);
    }
}
