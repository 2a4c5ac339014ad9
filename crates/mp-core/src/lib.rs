// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Merchant loading for the merchant profile screen.
//!
//! `MerchantSource` is the seam between the screen and whatever produces a
//! merchant record (the REST client, or a mock in tests). `load_merchant`
//! turns one fetch attempt into a `LoadResolution`, substituting the demo
//! record on every failure so callers never have to handle an error.

pub mod loader;
pub mod merchant_source;

pub use loader::{DEMO_DATA_NOTICE, LoadResolution, load_merchant};
pub use merchant_source::{FetchError, MerchantSource};
