// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! View layer
//!
//! Pure rendering of `ProfileViewModel` state into ratatui widgets. The only
//! output besides the frame is the set of hit zones used to route mouse
//! clicks back to the view model.

pub mod hit_test;
pub mod profile_view;

pub use hit_test::{HitTestRegistry, HitZone};
pub use profile_view::{ADVISORY_TEXT, render};
