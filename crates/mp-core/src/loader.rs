// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! One-shot merchant loading with demo-data fallback

use mp_domain_types::MerchantRecord;
use tracing::{debug, info, warn};

use crate::merchant_source::{FetchError, MerchantSource};

/// Prefix of every notice shown when the demo record replaces a failed fetch
pub const DEMO_DATA_NOTICE: &str = "Using demo data.";

/// Terminal outcome of the single load attempt
#[derive(Debug, Clone, PartialEq)]
pub enum LoadResolution {
    /// A record to display, with the advisory notice when it is demo data
    Loaded {
        merchant: MerchantRecord,
        notice: Option<String>,
    },
    /// The server explicitly answered that there is no merchant
    NoData,
}

impl LoadResolution {
    pub fn merchant(&self) -> Option<&MerchantRecord> {
        match self {
            LoadResolution::Loaded { merchant, .. } => Some(merchant),
            LoadResolution::NoData => None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            LoadResolution::Loaded { notice, .. } => notice.as_deref(),
            LoadResolution::NoData => None,
        }
    }
}

/// Fetch the merchant once and resolve it.
///
/// Failures never escape: a 401 silently yields `fallback`, every other
/// failure yields `fallback` together with a notice naming the error.
pub async fn load_merchant(
    source: &dyn MerchantSource,
    fallback: &MerchantRecord,
) -> LoadResolution {
    debug!(source = %source.describe(), "Fetching merchant record");

    match source.fetch_merchant().await {
        Ok(Some(merchant)) => {
            debug!(fields = merchant.len(), "Merchant record loaded");
            LoadResolution::Loaded {
                merchant,
                notice: None,
            }
        }
        Ok(None) => {
            info!("Server reported no merchant record");
            LoadResolution::NoData
        }
        Err(FetchError::Unauthorized) => {
            info!("Authentication required. Using mock data instead.");
            LoadResolution::Loaded {
                merchant: fallback.clone(),
                notice: None,
            }
        }
        Err(error) => {
            warn!(%error, "Error fetching merchant data, falling back to demo data");
            LoadResolution::Loaded {
                merchant: fallback.clone(),
                notice: Some(format!("{} {}", DEMO_DATA_NOTICE, error)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mp_domain_types::ProfileVariant;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSource {
        answer: Result<Option<MerchantRecord>, FetchError>,
        calls: AtomicUsize,
    }

    impl FixedSource {
        fn new(answer: Result<Option<MerchantRecord>, FetchError>) -> Self {
            Self {
                answer,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl MerchantSource for FixedSource {
        async fn fetch_merchant(&self) -> Result<Option<MerchantRecord>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer.clone()
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    fn fallback() -> MerchantRecord {
        ProfileVariant::Business.mock_record()
    }

    #[tokio::test]
    async fn unauthorized_uses_mock_without_notice() {
        let source = FixedSource::new(Err(FetchError::Unauthorized));
        let resolution = load_merchant(&source, &fallback()).await;

        assert_eq!(resolution.merchant(), Some(&fallback()));
        assert_eq!(resolution.notice(), None);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn transport_failure_uses_mock_with_notice() {
        let source = FixedSource::new(Err(FetchError::Transport("connection refused".into())));
        let resolution = load_merchant(&source, &fallback()).await;

        assert_eq!(resolution.merchant(), Some(&fallback()));
        assert_eq!(resolution.notice(), Some("Using demo data. connection refused"));
    }

    #[tokio::test]
    async fn status_failure_names_the_status() {
        let source = FixedSource::new(Err(FetchError::Status(500)));
        let resolution = load_merchant(&source, &fallback()).await;

        assert_eq!(
            resolution.notice(),
            Some("Using demo data. API request failed with status 500")
        );
    }

    #[tokio::test]
    async fn success_is_stored_verbatim() {
        let payload = serde_json::json!({"businessName": "Acme", "merchantId": 12, "extra": "x"});
        let record = MerchantRecord::from_json(payload.clone()).unwrap();
        let source = FixedSource::new(Ok(record));
        let resolution = load_merchant(&source, &fallback()).await;

        assert_eq!(resolution.merchant().cloned().map(MerchantRecord::into_json), Some(payload));
        assert_eq!(resolution.notice(), None);
    }

    #[tokio::test]
    async fn null_body_is_the_only_path_without_a_merchant() {
        let failures = [
            Err(FetchError::Unauthorized),
            Err(FetchError::Status(404)),
            Err(FetchError::Transport("boom".into())),
            Err(FetchError::Decode("not json".into())),
        ];
        for answer in failures {
            let resolution = load_merchant(&FixedSource::new(answer), &fallback()).await;
            assert!(resolution.merchant().is_some());
        }

        let resolution = load_merchant(&FixedSource::new(Ok(None)), &fallback()).await;
        assert_eq!(resolution, LoadResolution::NoData);
    }
}
