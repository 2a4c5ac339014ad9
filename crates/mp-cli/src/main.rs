// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Result;
use mp_cli::{Cli, Parser};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    Cli::parse().run().await
}
