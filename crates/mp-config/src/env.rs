// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Environment variable and command-line flag overlays

use anyhow::Result;
use serde_json::Value as J;

use crate::schema::SchemaRoot;

/// Prefix of configuration environment variables (`MP_MERCHANT_ID`, ...)
pub const ENV_PREFIX: &str = "MP";

/// Overlay built from the process environment
pub fn env_overlay() -> Result<J> {
    env_overlay_from(None)
}

/// Overlay built from `source`, or from the process environment when `None`.
///
/// `MP_SERVICE_BASE_URL` maps to `service-base-url`. Numeric values are
/// parsed so `MP_MERCHANT_ID=7` validates as an integer. Variables that are
/// not configuration keys (such as `MP_HOME`) are dropped.
pub fn env_overlay_from(source: Option<config::Map<String, String>>) -> Result<J> {
    let built = config::Config::builder()
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .convert_case(config::Case::Kebab)
                .try_parsing(true)
                .source(source),
        )
        .build()?;

    let mut map = built.try_deserialize::<serde_json::Map<String, J>>()?;
    map.retain(|key, _| SchemaRoot::KEYS.contains(&key.as_str()));
    Ok(J::Object(map))
}

/// Overlay built from command-line flags, keyed by dotted config path
pub fn flags_overlay(kv_pairs: &[(&str, J)]) -> J {
    let mut root = serde_json::json!({});
    for (k, v) in kv_pairs {
        crate::merge::insert_dotted(&mut root, k, v.clone());
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn env_keys_become_kebab_case() {
        let overlay = env_overlay_from(Some(vars(&[
            ("MP_SERVICE_BASE_URL", "http://localhost:3001"),
            ("MP_MERCHANT_ID", "7"),
        ])))
        .unwrap();

        assert_eq!(overlay["service-base-url"], "http://localhost:3001");
        assert_eq!(overlay["merchant-id"], 7);
    }

    #[test]
    fn non_config_variables_are_ignored() {
        let overlay = env_overlay_from(Some(vars(&[
            ("MP_HOME", "/tmp/mp"),
            ("HOME", "/root"),
            ("MP_VARIANT", "generic"),
        ])))
        .unwrap();

        assert_eq!(overlay, json!({"variant": "generic"}));
    }

    #[test]
    fn flags_overlay_keeps_value_types() {
        let overlay = flags_overlay(&[("merchant-id", json!(9)), ("variant", json!("business"))]);
        assert_eq!(overlay, json!({"merchant-id": 9, "variant": "business"}));
    }
}
