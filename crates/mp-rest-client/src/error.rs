// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for the REST client

use mp_core::FetchError;
use mp_domain_types::MerchantDecodeError;
use reqwest::StatusCode;
use thiserror::Error;

pub type RestClientResult<T> = Result<T, RestClientError>;

#[derive(Debug, Error)]
pub enum RestClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid merchant payload: {0}")]
    InvalidMerchant(#[from] MerchantDecodeError),

    #[error("Authentication required")]
    Unauthorized,

    #[error("API request failed with status {}", .status.as_u16())]
    ServerError { status: StatusCode, body: String },
}

impl From<RestClientError> for FetchError {
    fn from(error: RestClientError) -> Self {
        match error {
            RestClientError::Unauthorized => FetchError::Unauthorized,
            RestClientError::ServerError { status, .. } => FetchError::Status(status.as_u16()),
            RestClientError::Http(e) if e.is_decode() => FetchError::Decode(e.to_string()),
            RestClientError::Json(e) => FetchError::Decode(e.to_string()),
            RestClientError::InvalidMerchant(e) => FetchError::Decode(e.to_string()),
            other => FetchError::Transport(other.to_string()),
        }
    }
}
