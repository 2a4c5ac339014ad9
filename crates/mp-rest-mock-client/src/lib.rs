// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Mock merchant source implementing the MerchantSource trait for testing
//!
//! This crate provides a scripted implementation of `MerchantSource` that
//! answers without making network calls. It is designed for testing the
//! loader and the TUI with every response class the real service can
//! produce, with a configurable delay to exercise the loading state.

use async_trait::async_trait;
use mp_core::{FetchError, MerchantSource};
use mp_domain_types::{MerchantRecord, ProfileVariant};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Canned answer returned by the mock
#[derive(Debug, Clone, PartialEq)]
pub enum MockResponse {
    /// 2xx with a JSON object body
    Record(MerchantRecord),
    /// 2xx with a `null` body
    NoData,
    /// 401
    Unauthorized,
    /// Any other HTTP status
    Status(u16),
    /// Network-level failure with the given message
    Unreachable(String),
    /// 2xx with a body that is not a merchant object
    Malformed(String),
}

/// Mock merchant source with call accounting
#[derive(Debug, Clone)]
pub struct MockMerchantSource {
    response: MockResponse,
    /// Simulated network delay (in milliseconds)
    delay_ms: u64,
    /// Fetches started
    calls: Arc<AtomicUsize>,
    /// Fetches that ran to completion (not cancelled mid-flight)
    completed: Arc<AtomicUsize>,
}

impl MockMerchantSource {
    /// Create a mock answering with the given response and no delay
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            delay_ms: 0,
            calls: Arc::new(AtomicUsize::new(0)),
            completed: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Successful fetch of `record`
    pub fn with_record(record: MerchantRecord) -> Self {
        Self::new(MockResponse::Record(record))
    }

    /// Successful fetch of the variant's demo record
    pub fn with_mock_data(variant: ProfileVariant) -> Self {
        Self::with_record(variant.mock_record())
    }

    pub fn unauthorized() -> Self {
        Self::new(MockResponse::Unauthorized)
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self::new(MockResponse::Status(status))
    }

    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::new(MockResponse::Unreachable(message.into()))
    }

    /// Successful status whose body does not decode into a merchant
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(MockResponse::Malformed(message.into()))
    }

    pub fn no_data() -> Self {
        Self::new(MockResponse::NoData)
    }

    /// Delay every answer by `delay_ms`
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Number of fetches started so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of fetches that produced an answer
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    fn answer(&self) -> Result<Option<MerchantRecord>, FetchError> {
        match &self.response {
            MockResponse::Record(record) => Ok(Some(record.clone())),
            MockResponse::NoData => Ok(None),
            MockResponse::Unauthorized => Err(FetchError::Unauthorized),
            MockResponse::Status(status) => Err(FetchError::Status(*status)),
            MockResponse::Unreachable(message) => Err(FetchError::Transport(message.clone())),
            MockResponse::Malformed(message) => Err(FetchError::Decode(message.clone())),
        }
    }
}

impl Default for MockMerchantSource {
    fn default() -> Self {
        Self::with_mock_data(ProfileVariant::default())
    }
}

#[async_trait]
impl MerchantSource for MockMerchantSource {
    async fn fetch_merchant(&self) -> Result<Option<MerchantRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        // Simulate network delay
        if self.delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
        }

        self.completed.fetch_add(1, Ordering::SeqCst);
        debug!(response = ?self.response, "Mock merchant source answering");
        self.answer()
    }

    fn describe(&self) -> String {
        format!("mock ({:?})", self.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn answers_with_scripted_record() {
        let record = MerchantRecord::new().with("businessName", "Scripted");
        let source = MockMerchantSource::with_record(record.clone());

        assert_eq!(source.fetch_merchant().await, Ok(Some(record)));
        assert_eq!(source.calls(), 1);
        assert_eq!(source.completed(), 1);
    }

    #[tokio::test]
    async fn maps_failures_to_fetch_errors() {
        assert_eq!(
            MockMerchantSource::unauthorized().fetch_merchant().await,
            Err(FetchError::Unauthorized)
        );
        assert_eq!(
            MockMerchantSource::failing_with_status(502).fetch_merchant().await,
            Err(FetchError::Status(502))
        );
        assert_eq!(
            MockMerchantSource::unreachable("Failed to fetch").fetch_merchant().await,
            Err(FetchError::Transport("Failed to fetch".into()))
        );
        assert_eq!(
            MockMerchantSource::malformed("not an object").fetch_merchant().await,
            Err(FetchError::Decode("not an object".into()))
        );
        assert_eq!(MockMerchantSource::no_data().fetch_merchant().await, Ok(None));
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_fetch_counts_completion_only_at_the_end() {
        let source = MockMerchantSource::default().with_delay(500);
        let probe = source.clone();
        let task = tokio::spawn(async move { source.fetch_merchant().await });

        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert_eq!(probe.calls(), 1);
        assert_eq!(probe.completed(), 0);

        task.await.unwrap().unwrap();
        assert_eq!(probe.completed(), 1);
    }
}
