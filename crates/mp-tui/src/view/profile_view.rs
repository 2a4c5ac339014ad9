// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Schema-driven rendering of the profile screen

use mp_domain_types::{FieldKind, FieldSpec, MerchantRecord, ProfileSchema, Section};
use ratatui::{prelude::*, widgets::*};

use super::hit_test::HitTestRegistry;
use crate::theme::Theme;
use crate::view_model::{
    EditForm, FieldInput, FormFocus, MouseAction, ProfileMode, ProfileState, ProfileViewModel,
};

/// Second line of the demo-data banner
pub const ADVISORY_TEXT: &str =
    "This form is currently displaying mock data. To connect to the real API, you'll need to provide authentication credentials.";

const EDIT_BUTTON_LABEL: &str = " Edit Profile ";
const CANCEL_BUTTON_LABEL: &str = "Cancel";
const SAVE_BUTTON_LABEL: &str = "Save Changes";

/// Inputs never grow wider than this
const MAX_INPUT_WIDTH: u16 = 72;
const INPUT_HEIGHT: u16 = 3;
const SECTION_TITLE_HEIGHT: u16 = 2;

#[derive(Clone, Copy)]
enum Screen {
    Loading,
    Empty,
    Viewing,
    Editing,
}

/// Render the whole screen and record its clickable zones in `hit_registry`
pub fn render(
    frame: &mut Frame,
    vm: &mut ProfileViewModel,
    theme: &Theme,
    hit_registry: &mut HitTestRegistry<MouseAction>,
) {
    hit_registry.clear();

    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let screen = match vm.state() {
        ProfileState::Loading => Screen::Loading,
        ProfileState::Empty => Screen::Empty,
        ProfileState::Loaded {
            mode: ProfileMode::Viewing,
            ..
        } => Screen::Viewing,
        ProfileState::Loaded {
            mode: ProfileMode::Editing(_),
            ..
        } => Screen::Editing,
    };

    render_header(frame, header_area, screen, theme, hit_registry);
    render_footer(frame, footer_area, screen, theme);

    let body_area = match vm.notice().map(str::to_owned) {
        Some(notice) => {
            let height = notice_height(&notice, body_area.width).min(body_area.height);
            let [notice_area, rest] =
                Layout::vertical([Constraint::Length(height), Constraint::Min(0)]).areas(body_area);
            render_notice(frame, notice_area, &notice, theme);
            rest
        }
        None => body_area,
    };
    let body_area = body_area.inner(Margin::new(2, 1));

    let schema = vm.schema();
    match screen {
        Screen::Loading => render_loading(frame, body_area, vm.spinner_frame(), theme),
        Screen::Empty => render_centered(
            frame,
            body_area,
            vec![Line::styled("No merchant data found", theme.muted_style())],
        ),
        Screen::Viewing => render_viewing(frame, body_area, vm, schema, theme),
        Screen::Editing => {
            if let Some(form) = vm.edit_form_mut() {
                render_editing(frame, body_area, form, theme, hit_registry);
            }
        }
    }
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    screen: Screen,
    theme: &Theme,
    hit_registry: &mut HitTestRegistry<MouseAction>,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border))
        .padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "My Profile",
            theme.text_style().add_modifier(Modifier::BOLD),
        )),
        inner,
    );

    // The edit button only exists while a record is being viewed
    if matches!(screen, Screen::Viewing) {
        let width = (EDIT_BUTTON_LABEL.chars().count() as u16).min(inner.width);
        let button = Rect {
            x: inner.right().saturating_sub(width),
            y: inner.y,
            width,
            height: 1.min(inner.height),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                EDIT_BUTTON_LABEL,
                theme.button_style(theme.primary, true),
            )),
            button,
        );
        hit_registry.register(button, MouseAction::EditProfile);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, screen: Screen, theme: &Theme) {
    let hints = match screen {
        Screen::Loading | Screen::Empty => "q quit",
        Screen::Viewing => "e edit · ↑/↓ PgUp/PgDn scroll · q quit",
        Screen::Editing => {
            "Tab/Shift-Tab move · ←/→ status · Enter activate · Ctrl-S save · Esc cancel"
        }
    };
    frame.render_widget(
        Paragraph::new(Line::styled(hints, theme.muted_style()))
            .block(Block::default().padding(Padding::horizontal(2))),
        area,
    );
}

/// Rows taken by the banner at `width`, borders included
fn notice_height(notice: &str, width: u16) -> u16 {
    let inner = width.saturating_sub(4).max(1) as usize;
    let rows = |text: &str| text.chars().count().div_ceil(inner).max(1);
    let note = format!("Note: {notice}");
    (rows(&note) + rows(ADVISORY_TEXT) + 2) as u16
}

fn render_notice(frame: &mut Frame, area: Rect, notice: &str, theme: &Theme) {
    let text = vec![
        Line::from(format!("Note: {notice}")),
        Line::styled(ADVISORY_TEXT, Style::default().fg(theme.warning).add_modifier(Modifier::DIM)),
    ];
    frame.render_widget(
        Paragraph::new(text).block(theme.notice_block()).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_loading(frame: &mut Frame, area: Rect, spinner: &str, theme: &Theme) {
    render_centered(
        frame,
        area,
        vec![
            Line::styled(spinner.to_string(), theme.primary_style()),
            Line::from(""),
            Line::styled("Loading profile data...", theme.muted_style()),
        ],
    );
}

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let height = (lines.len() as u16).min(area.height);
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
}

/// Read-only presentation of `record`, one label/value pair per visible field
fn viewing_lines(
    schema: ProfileSchema,
    record: &MerchantRecord,
    width: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, (section, fields)) in schema.sections().into_iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(section_heading(section, width, theme));

        for field in fields.into_iter().filter(|f| f.is_visible_in(record)) {
            lines.push(Line::styled(field.label.to_uppercase(), theme.label_style()));
            lines.push(field_value_line(field, record, theme));
            lines.push(Line::from(""));
        }
    }

    lines
}

fn section_heading(section: Section, width: u16, theme: &Theme) -> [Line<'static>; 2] {
    [
        Line::styled(section.title(), theme.primary_style()),
        Line::styled("─".repeat(width as usize), Style::default().fg(theme.border)),
    ]
}

fn field_value_line(field: &FieldSpec, record: &MerchantRecord, theme: &Theme) -> Line<'static> {
    match field.kind {
        FieldKind::Text => {
            Line::styled(record.display_value(field.key).unwrap_or_default(), theme.text_style())
        }
        FieldKind::Status => {
            Line::styled(
                record.status_label().unwrap_or_default(),
                Style::default()
                    .fg(theme.status_color(record.status()))
                    .add_modifier(Modifier::BOLD),
            )
        }
    }
}

fn render_viewing(
    frame: &mut Frame,
    area: Rect,
    vm: &mut ProfileViewModel,
    schema: ProfileSchema,
    theme: &Theme,
) {
    let Some(record) = vm.merchant() else {
        return;
    };
    let lines = viewing_lines(schema, record, area.width, theme);

    let max_scroll = (lines.len() as u16).saturating_sub(area.height);
    vm.clamp_scroll(max_scroll);

    frame.render_widget(Paragraph::new(lines).scroll((vm.scroll(), 0)), area);
}

/// One row group of the edit layout, positioned in form coordinates
enum FormItem {
    Heading(Section),
    Input(usize),
    Buttons,
}

fn render_editing(
    frame: &mut Frame,
    area: Rect,
    form: &mut EditForm,
    theme: &Theme,
    hit_registry: &mut HitTestRegistry<MouseAction>,
) {
    // Lay the whole form out in a virtual column, then show the window
    // that keeps the focused element visible.
    let mut items: Vec<(FormItem, u16, u16)> = Vec::new();
    let mut y = 0;
    let mut current_section = None;
    for (index, input) in form.inputs().iter().enumerate() {
        let section = input.spec().section;
        if current_section != Some(section) {
            if current_section.is_some() {
                y += 1;
            }
            items.push((FormItem::Heading(section), y, SECTION_TITLE_HEIGHT));
            y += SECTION_TITLE_HEIGHT;
            current_section = Some(section);
        }
        items.push((FormItem::Input(index), y, INPUT_HEIGHT));
        y += INPUT_HEIGHT;
    }
    y += 1;
    items.push((FormItem::Buttons, y, INPUT_HEIGHT));
    let total_height = y + INPUT_HEIGHT;

    let focus = form.focus();
    let focused_range = items.iter().find_map(|(item, y, h)| match (item, focus) {
        (FormItem::Input(i), FormFocus::Field(f)) if *i == f => Some((*y, *h)),
        (FormItem::Buttons, FormFocus::Cancel | FormFocus::Save) => Some((*y, *h)),
        _ => None,
    });
    if let Some((top, height)) = focused_range {
        if top < form.scroll {
            form.scroll = top;
        } else if top + height > form.scroll + area.height {
            form.scroll = (top + height).saturating_sub(area.height);
        }
    }
    form.scroll = form.scroll.min(total_height.saturating_sub(area.height));

    let width = area.width.min(MAX_INPUT_WIDTH);
    for (item, top, height) in items {
        if top < form.scroll || top + height > form.scroll + area.height {
            continue;
        }
        let rect = Rect {
            x: area.x,
            y: area.y + (top - form.scroll),
            width,
            height,
        };

        match item {
            FormItem::Heading(section) => {
                let heading = section_heading(section, width, theme).to_vec();
                frame.render_widget(Paragraph::new(heading), rect);
            }
            FormItem::Input(index) => {
                let focused = focus == FormFocus::Field(index);
                if let Some(input) = form.input_mut(index) {
                    render_input(frame, rect, input, focused, theme);
                }
                hit_registry.register(rect, MouseAction::FocusField(index));
            }
            FormItem::Buttons => render_buttons(frame, rect, focus, theme, hit_registry),
        }
    }
}

fn render_input(
    frame: &mut Frame,
    rect: Rect,
    input: &mut FieldInput,
    focused: bool,
    theme: &Theme,
) {
    let spec = input.spec();
    let block = theme.input_block(spec.label, focused);

    match input {
        FieldInput::Text { textarea, .. } => {
            textarea.set_block(block);
            textarea.set_style(theme.text_style());
            textarea.set_cursor_line_style(Style::default());
            textarea.set_cursor_style(if focused {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            });
            frame.render_widget(&*textarea, rect);
        }
        FieldInput::Status { selected, .. } => {
            let line = match selected {
                Some(status) => Line::from(vec![
                    Span::styled("◀ ", theme.muted_style()),
                    Span::styled(
                        status.label(),
                        Style::default()
                            .fg(theme.status_color(Some(*status)))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" ▶", theme.muted_style()),
                ]),
                None => Line::styled("◀ Select status ▶", theme.muted_style()),
            };
            frame.render_widget(Paragraph::new(line).block(block), rect);
        }
    }
}

fn render_buttons(
    frame: &mut Frame,
    rect: Rect,
    focus: FormFocus,
    theme: &Theme,
    hit_registry: &mut HitTestRegistry<MouseAction>,
) {
    let button_width = |label: &str| label.chars().count() as u16 + 4;
    let [cancel_area, _, save_area, _] = Layout::horizontal([
        Constraint::Length(button_width(CANCEL_BUTTON_LABEL)),
        Constraint::Length(2),
        Constraint::Length(button_width(SAVE_BUTTON_LABEL)),
        Constraint::Min(0),
    ])
    .areas(rect);

    let buttons = [
        (cancel_area, CANCEL_BUTTON_LABEL, theme.error, FormFocus::Cancel, MouseAction::CancelEdit),
        (save_area, SAVE_BUTTON_LABEL, theme.primary, FormFocus::Save, MouseAction::SaveEdit),
    ];
    for (area, label, color, button_focus, action) in buttons {
        let focused = focus == button_focus;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));
        frame.render_widget(
            Paragraph::new(Line::styled(label, theme.button_style(color, focused)))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        hit_registry.register(area, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_height_grows_when_narrow() {
        let wide = notice_height("Using demo data. boom", 200);
        let narrow = notice_height("Using demo data. boom", 40);
        assert_eq!(wide, 4);
        assert!(narrow > wide);
    }
}
