// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Interactive profile screen command

use std::sync::Arc;

use anyhow::{Context, Result};
use mp_rest_client::RestClient;
use mp_tui::{ProfileScreenOptions, run_profile_screen};
use tracing::info;

use crate::Settings;

pub async fn run(settings: &Settings) -> Result<()> {
    let client = RestClient::from_network_config(&settings.network)
        .context("creating merchant service client")?;
    let options = ProfileScreenOptions {
        variant: settings.profile.variant(),
        tick: settings.profile.tick(),
    };

    info!(
        base_url = %client.base_url(),
        merchant_id = client.merchant_id(),
        "Merchant service client ready"
    );
    let result = run_profile_screen(Arc::new(client), options).await;
    info!("Profile screen closed");
    result
}
