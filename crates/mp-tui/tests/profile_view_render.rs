// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

mod support;

use mp_core::LoadResolution;
use mp_domain_types::{MerchantRecord, ProfileVariant};
use mp_tui::view::ADVISORY_TEXT;
use mp_tui::{MouseAction, ProfileViewModel, Theme};
use ratatui::crossterm::event::KeyCode;
use serde_json::Value;
use support::{contains_text, find_text, key, render_buffer};

const WIDTH: u16 = 160;
const HEIGHT: u16 = 80;

fn loaded(
    variant: ProfileVariant,
    merchant: MerchantRecord,
    notice: Option<&str>,
) -> ProfileViewModel {
    ProfileViewModel::with_resolution(
        variant,
        LoadResolution::Loaded {
            merchant,
            notice: notice.map(str::to_owned),
        },
    )
}

#[test]
fn loading_state_shows_only_the_placeholder() {
    let mut vm = ProfileViewModel::new(ProfileVariant::Business);
    let (buffer, hits) = render_buffer(&mut vm, WIDTH, HEIGHT);

    assert!(contains_text(&buffer, "Loading profile data..."));
    assert!(!contains_text(&buffer, "Business Details"));
    assert!(!contains_text(&buffer, "Edit Profile"));
    assert!(hits.is_empty());
}

#[test]
fn business_record_renders_by_section() {
    let variant = ProfileVariant::Business;
    let mut vm = loaded(variant, variant.mock_record(), None);
    let (buffer, _) = render_buffer(&mut vm, WIDTH, HEIGHT);

    for heading in [
        "My Profile",
        "Business Details",
        "Contact Information",
        "Address Information",
    ] {
        assert!(contains_text(&buffer, heading), "missing {heading}");
    }
    assert!(contains_text(&buffer, "REGISTRATION NUMBER"));
    assert!(contains_text(&buffer, "789456584"));
    assert!(contains_text(&buffer, "lovepih494@excederm.com"));
    assert!(contains_text(&buffer, "ADDRESS LINE 2"));
    assert!(!contains_text(&buffer, "Note:"));
}

#[test]
fn absent_optional_address_lines_are_omitted() {
    let variant = ProfileVariant::Business;
    let record = variant
        .mock_record()
        .with("addressLine2", Value::Null)
        .with("addressLine3", "");
    let mut vm = loaded(variant, record, None);
    let (buffer, _) = render_buffer(&mut vm, WIDTH, HEIGHT);

    assert!(contains_text(&buffer, "ADDRESS LINE 1"));
    assert!(!contains_text(&buffer, "ADDRESS LINE 2"));
    assert!(!contains_text(&buffer, "ADDRESS LINE 3"));
}

#[test]
fn present_optional_address_line_is_shown_verbatim() {
    let variant = ProfileVariant::Business;
    let record = MerchantRecord::new()
        .with("businessName", "Acme")
        .with("addressLine3", "Building C, Floor 2");
    let mut vm = loaded(variant, record, None);
    let (buffer, _) = render_buffer(&mut vm, WIDTH, HEIGHT);

    assert!(contains_text(&buffer, "ADDRESS LINE 3"));
    assert!(contains_text(&buffer, "Building C, Floor 2"));
    assert!(!contains_text(&buffer, "ADDRESS LINE 2"));
    // Required fields keep their label even without a value
    assert!(contains_text(&buffer, "POSTAL/ZIP CODE"));
}

#[test]
fn notice_banner_names_the_error() {
    let variant = ProfileVariant::Business;
    let mut vm = loaded(
        variant,
        variant.mock_record(),
        Some("Using demo data. API request failed with status 500"),
    );
    let (buffer, _) = render_buffer(&mut vm, WIDTH, HEIGHT);

    assert!(contains_text(
        &buffer,
        "Note: Using demo data. API request failed with status 500"
    ));
    assert!(contains_text(&buffer, ADVISORY_TEXT));
}

#[test]
fn empty_state_message() {
    let mut vm = ProfileViewModel::with_resolution(ProfileVariant::Generic, LoadResolution::NoData);
    let (buffer, hits) = render_buffer(&mut vm, WIDTH, HEIGHT);

    assert!(contains_text(&buffer, "No merchant data found"));
    assert!(!contains_text(&buffer, "Edit Profile"));
    assert!(hits.is_empty());
}

#[test]
fn generic_status_is_capitalised_and_coloured() {
    let variant = ProfileVariant::Generic;
    let theme = Theme::default();

    for (raw, label, color) in [
        ("active", "Active", theme.success),
        ("inactive", "Inactive", theme.error),
        ("suspended", "Suspended", theme.warning),
    ] {
        let mut vm = loaded(variant, variant.mock_record().with("status", raw), None);
        let (buffer, _) = render_buffer(&mut vm, WIDTH, HEIGHT);

        let (x, y) = find_text(&buffer, label).unwrap_or_else(|| panic!("missing {label}"));
        assert_eq!(buffer.cell((x, y)).unwrap().fg, color, "colour of {label}");
    }
}

#[test]
fn edit_button_is_clickable() {
    let variant = ProfileVariant::Business;
    let mut vm = loaded(variant, variant.mock_record(), None);
    let (buffer, hits) = render_buffer(&mut vm, WIDTH, HEIGHT);

    let (x, y) = find_text(&buffer, "Edit Profile").expect("edit button");
    let hit = hits.hit_test(x, y).expect("hit zone");
    assert_eq!(hit.action, MouseAction::EditProfile);
}

#[test]
fn edit_mode_shows_inputs_and_buttons() {
    let variant = ProfileVariant::Generic;
    let mut vm = loaded(variant, variant.mock_record(), Some("Using demo data. boom"));
    vm.update(key(KeyCode::Char('e')));
    let (buffer, hits) = render_buffer(&mut vm, WIDTH, HEIGHT);

    assert!(!contains_text(&buffer, "Edit Profile"));
    assert!(contains_text(&buffer, "Note: Using demo data. boom"));
    assert!(contains_text(&buffer, "SpareHive Demo Merchant"));
    assert!(contains_text(&buffer, "◀ Active ▶"));

    let (x, y) = find_text(&buffer, "Save Changes").expect("save button");
    assert_eq!(hits.hit_test(x, y).map(|h| h.action), Some(MouseAction::SaveEdit));
    let (x, y) = find_text(&buffer, "Cancel").expect("cancel button");
    assert_eq!(hits.hit_test(x, y).map(|h| h.action), Some(MouseAction::CancelEdit));
    let (x, y) = find_text(&buffer, "Merchant Name").expect("name input");
    assert_eq!(hits.hit_test(x, y).map(|h| h.action), Some(MouseAction::FocusField(0)));
}

#[test]
fn focused_field_is_scrolled_into_view_in_a_short_terminal() {
    let variant = ProfileVariant::Business;
    let mut vm = loaded(variant, variant.mock_record(), None);
    vm.update(key(KeyCode::Char('e')));
    // Focus the Save button, the last element of the form
    vm.update(key(KeyCode::BackTab));

    let (buffer, _) = render_buffer(&mut vm, 100, 20);
    assert!(contains_text(&buffer, "Save Changes"));
    assert!(!contains_text(&buffer, "Business Name"));
}
