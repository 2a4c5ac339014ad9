// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! REST API client for the merchant profile service
//!
//! This crate provides the HTTP client that reads the single merchant record
//! shown by the profile screen. It only ever issues one `GET` per load; it
//! never writes, retries or authenticates.
//!
//! The client implements the `MerchantSource` trait so the loader and the
//! TUI can be driven by it or by a mock interchangeably.

pub mod client;
pub mod error;
pub mod network_config;

pub use client::*;
pub use error::*;
pub use network_config::*;

use async_trait::async_trait;
use mp_core::{FetchError, MerchantSource};
use mp_domain_types::MerchantRecord;

#[async_trait]
impl MerchantSource for client::RestClient {
    async fn fetch_merchant(&self) -> Result<Option<MerchantRecord>, FetchError> {
        self.get_merchant().await.map_err(FetchError::from)
    }

    fn describe(&self) -> String {
        self.merchant_url()
            .map(|url| url.to_string())
            .unwrap_or_else(|_| self.base_url().to_string())
    }
}
