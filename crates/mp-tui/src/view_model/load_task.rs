// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Background merchant load bound to its owner's lifetime

use mp_core::{LoadResolution, MerchantSource, load_merchant};
use mp_domain_types::MerchantRecord;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// The single in-flight load. Dropping it cancels the fetch, so a result
/// never arrives for a screen that is gone.
#[derive(Debug)]
pub struct LoadTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl LoadTask {
    /// Spawn the load on the current runtime; the resolution is sent on `tx`
    pub fn spawn(
        source: Arc<dyn MerchantSource>,
        fallback: MerchantRecord,
        tx: mpsc::UnboundedSender<LoadResolution>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Merchant load cancelled before completion");
                }
                resolution = load_merchant(source.as_ref(), &fallback) => {
                    // The receiver is gone when the screen was closed meanwhile
                    let _ = tx.send(resolution);
                }
            }
        });

        Self { cancel, handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for LoadTask {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.handle.abort();
    }
}
