// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Terminal merchant profile screen
//!
//! Follows a Model-View-ViewModel split:
//!
//! - the model is `mp_core` (the record source and the fallback loader)
//! - `view_model` holds the screen state machine and handles input
//! - `view` renders that state with ratatui and reports clickable zones
//!
//! `run_profile_screen` wires them to a real terminal.

pub mod profile_loop;
pub mod terminal;
pub mod theme;
pub mod view;
pub mod view_model;

pub use profile_loop::{ProfileScreenOptions, run_profile_screen};
pub use theme::Theme;
pub use view::{HitTestRegistry, render};
pub use view_model::{MouseAction, Msg, ProfileMode, ProfileState, ProfileViewModel};
