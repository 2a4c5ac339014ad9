// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Configuration file path discovery

use std::path::{Path, PathBuf};

/// Overrides the directory holding the user configuration file
pub const HOME_ENV_VAR: &str = "MP_HOME";

/// Configuration files in precedence order
#[derive(Debug, Clone)]
pub struct Paths {
    /// Optional per-user file; silently skipped when missing
    pub user: PathBuf,
    /// File passed with `--config`; must exist when given
    pub cli_config: Option<PathBuf>,
}

/// Discover configuration paths for the current environment
pub fn discover_paths(cli_config: Option<&Path>) -> Paths {
    Paths {
        user: user_config_path(std::env::var_os(HOME_ENV_VAR).map(PathBuf::from)),
        cli_config: cli_config.map(Path::to_path_buf),
    }
}

/// `$MP_HOME/config.toml`, else `<platform config dir>/merchant-profile/config.toml`
fn user_config_path(mp_home: Option<PathBuf>) -> PathBuf {
    if let Some(home) = mp_home {
        return home.join("config.toml");
    }

    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join(mp_logging::APP_NAME)
        .join("config.toml")
}
