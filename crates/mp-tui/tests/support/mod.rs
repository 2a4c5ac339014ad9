// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use mp_tui::{HitTestRegistry, MouseAction, Msg, ProfileViewModel, Theme};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

/// Render the screen into an off-screen buffer, returning the hit zones too
pub fn render_buffer(
    vm: &mut ProfileViewModel,
    width: u16,
    height: u16,
) -> (Buffer, HitTestRegistry<MouseAction>) {
    let theme = Theme::default();
    let mut hits = HitTestRegistry::new();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| mp_tui::render(f, vm, &theme, &mut hits)).unwrap();
    (terminal.backend().buffer().clone(), hits)
}

/// All rows of the buffer as plain text
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area().height)
        .map(|y| {
            (0..buffer.area().width)
                .map(|x| buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
                .collect::<String>()
        })
        .collect()
}

/// Position of the first occurrence of `needle` (column counted in cells)
pub fn find_text(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    for (y, line) in buffer_lines(buffer).iter().enumerate() {
        if let Some(idx) = line.find(needle) {
            let column = line[..idx].chars().count();
            return Some((column as u16, y as u16));
        }
    }
    None
}

pub fn contains_text(buffer: &Buffer, needle: &str) -> bool {
    find_text(buffer, needle).is_some()
}

pub fn key(code: KeyCode) -> Msg {
    Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[allow(dead_code)]
pub fn ctrl(c: char) -> Msg {
    Msg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

#[allow(dead_code)]
pub fn type_text(vm: &mut ProfileViewModel, text: &str) {
    for c in text.chars() {
        vm.update(key(KeyCode::Char(c)));
    }
}
