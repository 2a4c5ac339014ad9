// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Declarative field schemas for the profile screen
//!
//! Each profile variant is a static list of `FieldSpec`s. Renderers walk the
//! list section by section; nothing about a variant is hand-written in the
//! view layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::merchant::MerchantRecord;

/// Heading under which a group of fields is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    BusinessDetails,
    ContactInformation,
    MerchantInformation,
    AddressInformation,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::BusinessDetails => "Business Details",
            Section::ContactInformation => "Contact Information",
            Section::MerchantInformation => "Merchant Information",
            Section::AddressInformation => "Address Information",
        }
    }
}

/// How a field is presented in edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text input
    Text,
    /// Selector over `MerchantStatus`
    Status,
}

/// One row of a profile schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub section: Section,
    /// Optional fields are omitted from the read-only view when empty
    pub optional: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(key: &'static str, label: &'static str, section: Section) -> Self {
        Self {
            key,
            label,
            section,
            optional: false,
            kind: FieldKind::Text,
        }
    }

    pub const fn status(key: &'static str, label: &'static str, section: Section) -> Self {
        Self {
            key,
            label,
            section,
            optional: false,
            kind: FieldKind::Status,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Whether the read-only view shows this field for `record`
    pub fn is_visible_in(&self, record: &MerchantRecord) -> bool {
        !self.optional || record.has_value(self.key)
    }
}

/// Ordered list of fields making up one profile layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSchema {
    fields: &'static [FieldSpec],
}

impl ProfileSchema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Sections in first-appearance order, each with its fields
    pub fn sections(&self) -> Vec<(Section, Vec<&'static FieldSpec>)> {
        let mut grouped: Vec<(Section, Vec<&'static FieldSpec>)> = Vec::new();
        for field in self.fields {
            match grouped.iter_mut().find(|(section, _)| *section == field.section) {
                Some((_, fields)) => fields.push(field),
                None => grouped.push((field.section, vec![field])),
            }
        }
        grouped
    }
}

const BUSINESS_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("businessName", "Business Name", Section::BusinessDetails),
    FieldSpec::text("registrationNumber", "Registration Number", Section::BusinessDetails),
    FieldSpec::text("email", "Email Address", Section::ContactInformation),
    FieldSpec::text("phoneNumber", "Phone Number", Section::ContactInformation),
    FieldSpec::text("addressLine1", "Address Line 1", Section::AddressInformation),
    FieldSpec::text("addressLine2", "Address Line 2", Section::AddressInformation).optional(),
    FieldSpec::text("addressLine3", "Address Line 3", Section::AddressInformation).optional(),
    FieldSpec::text("city", "City", Section::AddressInformation),
    FieldSpec::text("county", "County", Section::AddressInformation),
    FieldSpec::text("state", "State/Province", Section::AddressInformation),
    FieldSpec::text("zipCode", "Postal/Zip Code", Section::AddressInformation),
    FieldSpec::text("country", "Country", Section::AddressInformation),
    FieldSpec::text("countryCode", "Country Code", Section::AddressInformation),
];

const GENERIC_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Merchant Name", Section::MerchantInformation),
    FieldSpec::text("email", "Email Address", Section::MerchantInformation),
    FieldSpec::text("phone", "Phone Number", Section::MerchantInformation),
    FieldSpec::status("status", "Status", Section::MerchantInformation),
    FieldSpec::text("address", "Street Address", Section::AddressInformation),
    FieldSpec::text("city", "City", Section::AddressInformation),
    FieldSpec::text("state", "State/Province", Section::AddressInformation),
    FieldSpec::text("zip", "Postal/Zip Code", Section::AddressInformation),
    FieldSpec::text("country", "Country", Section::AddressInformation),
];

/// Which field layout (and matching demo record) the screen uses
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProfileVariant {
    /// Business registration, contact and multi-line postal address
    #[default]
    Business,
    /// Merchant name, contact, status and a single street address
    Generic,
}

impl ProfileVariant {
    pub fn schema(self) -> ProfileSchema {
        match self {
            ProfileVariant::Business => ProfileSchema::new(BUSINESS_FIELDS),
            ProfileVariant::Generic => ProfileSchema::new(GENERIC_FIELDS),
        }
    }

    /// Fixed record substituted whenever the real fetch cannot be used
    pub fn mock_record(self) -> MerchantRecord {
        match self {
            ProfileVariant::Business => MerchantRecord::new()
                .with("merchantId", 6)
                .with("businessName", "test")
                .with("email", "lovepih494@excederm.com")
                .with("phoneNumber", "7894561230")
                .with("addressLine1", "ahmedabad")
                .with("addressLine2", "test")
                .with("addressLine3", "ahmedabad")
                .with("county", "in")
                .with("city", "ahmedabad")
                .with("state", "gujrat")
                .with("zipCode", "78941")
                .with("countryCode", "091")
                .with("country", "india")
                .with("pendingMerchantId", 7)
                .with("registrationNumber", "789456584")
                .with("userProfileId", 48),
            ProfileVariant::Generic => MerchantRecord::new()
                .with("id", 6)
                .with("name", "SpareHive Demo Merchant")
                .with("email", "demo@spareshive.com")
                .with("phone", "+1 (555) 123-4567")
                .with("address", "123 Main Street")
                .with("city", "San Francisco")
                .with("state", "CA")
                .with("zip", "94105")
                .with("country", "USA")
                .with("status", "active"),
        }
    }
}
