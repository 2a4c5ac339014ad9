// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! ViewModel layer
//!
//! Presentation state of the profile screen and the input handling that
//! drives it. Nothing here draws; the view reads this state and reports
//! clickable zones back as `MouseAction`s.

pub mod edit_form;
pub mod load_task;
pub mod profile_model;

pub use edit_form::{EditForm, FieldInput, FormFocus};
pub use load_task::LoadTask;
pub use profile_model::{MouseAction, Msg, ProfileMode, ProfileState, ProfileViewModel};
