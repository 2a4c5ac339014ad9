// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! One-shot profile dump
//!
//! Performs the same single load as the interactive screen and prints the
//! outcome, either as sectioned text or as the raw record in JSON.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use mp_core::{LoadResolution, MerchantSource, load_merchant};
use mp_domain_types::{FieldKind, FieldSpec, MerchantRecord, ProfileSchema, ProfileVariant};
use mp_rest_client::RestClient;
use mp_tui::view::ADVISORY_TEXT;

use crate::Settings;

#[derive(Args, Debug, Clone, Default)]
pub struct ShowArgs {
    /// Print the record as JSON; the notice, if any, goes to stderr
    #[arg(long)]
    pub json: bool,
}

pub async fn run(settings: &Settings, args: &ShowArgs) -> Result<()> {
    let client = RestClient::from_network_config(&settings.network)
        .context("creating merchant service client")?;
    show_profile(
        &client,
        settings.profile.variant(),
        args,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .await
}

/// Load the merchant from `source` and write it to `out`
pub async fn show_profile(
    source: &dyn MerchantSource,
    variant: ProfileVariant,
    args: &ShowArgs,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let resolution = load_merchant(source, &variant.mock_record()).await;

    if args.json {
        write_json(out, &resolution)?;
        if let Some(notice) = resolution.notice() {
            writeln!(err, "Note: {notice}")?;
        }
    } else {
        write_text(out, variant.schema(), &resolution)?;
    }
    out.flush()?;
    Ok(())
}

fn write_json(out: &mut impl Write, resolution: &LoadResolution) -> Result<()> {
    let text = match resolution.merchant() {
        Some(merchant) => serde_json::to_string_pretty(merchant.as_map())?,
        None => "null".to_string(),
    };
    writeln!(out, "{text}")?;
    Ok(())
}

fn write_text(
    out: &mut impl Write,
    schema: ProfileSchema,
    resolution: &LoadResolution,
) -> Result<()> {
    writeln!(out, "My Profile")?;
    writeln!(out, "==========")?;

    let Some(merchant) = resolution.merchant() else {
        writeln!(out)?;
        writeln!(out, "No merchant data found")?;
        return Ok(());
    };

    if let Some(notice) = resolution.notice() {
        writeln!(out)?;
        writeln!(out, "Note: {notice}")?;
        writeln!(out, "{ADVISORY_TEXT}")?;
    }

    for (section, fields) in schema.sections() {
        writeln!(out)?;
        writeln!(out, "{}", section.title())?;
        writeln!(out, "{}", "-".repeat(section.title().len()))?;

        let visible: Vec<_> = fields.into_iter().filter(|f| f.is_visible_in(merchant)).collect();
        let width = visible.iter().map(|f| f.label.len()).max().unwrap_or(0);
        for field in visible {
            writeln!(out, "  {:<width$}  {}", field.label, text_value(field, merchant))?;
        }
    }
    Ok(())
}

fn text_value(field: &FieldSpec, merchant: &MerchantRecord) -> String {
    match field.kind {
        FieldKind::Status => merchant.status_label().unwrap_or_default(),
        FieldKind::Text => merchant.display_value(field.key).unwrap_or_default(),
    }
}
