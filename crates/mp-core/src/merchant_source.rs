// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use async_trait::async_trait;
use mp_domain_types::MerchantRecord;
use thiserror::Error;

/// Failure classes a merchant fetch can end in
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered 401
    #[error("authentication required")]
    Unauthorized,

    /// Any other non-success status
    #[error("API request failed with status {0}")]
    Status(u16),

    /// The request never produced a response
    #[error("{0}")]
    Transport(String),

    /// A success response whose body could not be used
    #[error("invalid merchant payload: {0}")]
    Decode(String),
}

/// Abstract source of the single merchant record shown by the screen
///
/// Implementations:
/// - Remote: the REST client issuing one GET for the configured merchant
/// - Mock: scripted responses for tests and offline demos
#[async_trait]
pub trait MerchantSource: Send + Sync {
    /// Fetch the merchant record once.
    ///
    /// `Ok(None)` is the explicit "no merchant" answer (a `null` body).
    async fn fetch_merchant(&self) -> Result<Option<MerchantRecord>, FetchError>;

    /// Human-readable description of where records come from, used in logs
    fn describe(&self) -> String;
}
