// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Domain types for the merchant profile screen
//!
//! This crate contains the merchant record, the declarative field schemas
//! that drive both the read-only and the edit presentation, and the fixed
//! demo records substituted when the real record cannot be fetched.
//!
//! These types are UI-agnostic and shared by the loader, the REST client,
//! the TUI and the CLI.

pub mod merchant;
pub mod schema;

pub use merchant::*;
pub use schema::*;
