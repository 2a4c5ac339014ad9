// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Merchant record and related value types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised when a decoded payload cannot be used as a merchant record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MerchantDecodeError {
    #[error("expected a JSON object for the merchant record, got {0}")]
    NotAnObject(&'static str),
}

/// Flat mapping of merchant field names to JSON scalar values.
///
/// The record is never validated against a schema: whatever keys the
/// server returns are kept verbatim, and renderers pick the keys they know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerchantRecord(Map<String, Value>);

impl MerchantRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Interpret a decoded response body.
    ///
    /// `null` is the explicit "no merchant" signal and yields `Ok(None)`.
    pub fn from_json(value: Value) -> Result<Option<Self>, MerchantDecodeError> {
        match value {
            Value::Null => Ok(None),
            Value::Object(map) => Ok(Some(Self(map))),
            Value::Bool(_) => Err(MerchantDecodeError::NotAnObject("a boolean")),
            Value::Number(_) => Err(MerchantDecodeError::NotAnObject("a number")),
            Value::String(_) => Err(MerchantDecodeError::NotAnObject("a string")),
            Value::Array(_) => Err(MerchantDecodeError::NotAnObject("an array")),
        }
    }

    /// Builder-style insertion, mostly used for fixtures and mock records
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Text shown for a field, or `None` when the field is absent or `null`.
    pub fn display_value(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        }
    }

    /// Whether a field carries a non-empty value
    pub fn has_value(&self, key: &str) -> bool {
        self.display_value(key).is_some_and(|v| !v.is_empty())
    }

    /// Status of the merchant, when the record carries a recognised one
    pub fn status(&self) -> Option<MerchantStatus> {
        self.display_value("status")?.parse().ok()
    }

    /// Status text as displayed: the known label, or the raw value capitalised
    pub fn status_label(&self) -> Option<String> {
        match self.status() {
            Some(status) => Some(status.label().to_string()),
            None => self.display_value("status").map(|raw| capitalize(&raw)),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_json(self) -> Value {
        Value::Object(self.0)
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl From<Map<String, Value>> for MerchantRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Merchant account status offered by the status selector
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MerchantStatus {
    Active,
    Inactive,
    Pending,
}

impl MerchantStatus {
    pub const ALL: [MerchantStatus; 3] = [Self::Active, Self::Inactive, Self::Pending];

    /// Capitalised label used by the selector and the read-only badge
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Pending,
            Self::Pending => Self::Active,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Active => Self::Pending,
            Self::Inactive => Self::Active,
            Self::Pending => Self::Inactive,
        }
    }
}
