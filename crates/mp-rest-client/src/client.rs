// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Main REST API client implementation

use mp_domain_types::MerchantRecord;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use tracing::debug;
use url::Url;

use crate::error::{RestClientError, RestClientResult};
use crate::network_config::NetworkConfig;

/// REST API client for the merchant profile service
#[derive(Debug, Clone)]
pub struct RestClient {
    http_client: HttpClient,
    base_url: Url,
    merchant_id: u64,
}

impl RestClient {
    /// Create a new REST client reading the merchant `merchant_id`
    pub fn new(base_url: Url, merchant_id: u64) -> RestClientResult<Self> {
        let http_client = HttpClient::builder()
            .default_headers(Self::default_headers())
            .build()?;

        Ok(Self {
            http_client,
            base_url: with_trailing_slash(base_url),
            merchant_id,
        })
    }

    /// Create a client from a base URL string
    pub fn from_url(base_url: &str, merchant_id: u64) -> RestClientResult<Self> {
        let base_url = Url::parse(base_url)?;
        Self::new(base_url, merchant_id)
    }

    /// Create a client from the resolved network configuration
    pub fn from_network_config(config: &NetworkConfig) -> RestClientResult<Self> {
        Self::from_url(config.service_base_url(), config.merchant_id())
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn merchant_id(&self) -> u64 {
        self.merchant_id
    }

    /// Full URL of the merchant resource
    pub fn merchant_url(&self) -> RestClientResult<Url> {
        Ok(self.base_url.join(&format!("merchant/{}", self.merchant_id))?)
    }

    /// Read the merchant record.
    ///
    /// `Ok(None)` means the server answered with a `null` body.
    pub async fn get_merchant(&self) -> RestClientResult<Option<MerchantRecord>> {
        let url = self.merchant_url()?;
        let body: serde_json::Value = self.get(url).await?;
        Ok(MerchantRecord::from_json(body)?)
    }

    // Private helper methods

    /// Headers sent with every request. No credentials are attached.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    async fn get(&self, url: Url) -> RestClientResult<serde_json::Value> {
        debug!(%url, "GET");
        let response = self.http_client.request(Method::GET, url).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Response) -> RestClientResult<serde_json::Value> {
        let status = response.status();
        debug!(status = status.as_u16(), "Response received");

        if status == StatusCode::UNAUTHORIZED {
            return Err(RestClientError::Unauthorized);
        }

        let text = response.text().await?;
        if status.is_success() {
            serde_json::from_str(&text).map_err(RestClientError::from)
        } else {
            Err(RestClientError::ServerError { status, body: text })
        }
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let base_url = "http://localhost:3001";
        let client = RestClient::from_url(base_url, 6).unwrap();

        assert_eq!(client.base_url().to_string(), format!("{}/", base_url));
        assert_eq!(client.merchant_id(), 6);
    }

    #[test]
    fn merchant_url_keeps_base_path() {
        let client = RestClient::from_url("http://localhost:3001/api", 42).unwrap();
        assert_eq!(
            client.merchant_url().unwrap().as_str(),
            "http://localhost:3001/api/merchant/42"
        );
    }

    #[test]
    fn default_merchant_url_points_at_the_demo_service() {
        let client = RestClient::from_network_config(&NetworkConfig::default()).unwrap();
        assert_eq!(
            client.merchant_url().unwrap().as_str(),
            "https://spareshive-api-1523959fece7.herokuapp.com/merchant/6"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            RestClient::from_url("not a url", 6),
            Err(RestClientError::Url(_))
        ));
    }
}
