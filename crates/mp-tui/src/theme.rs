// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Colours and reusable block styles

use mp_domain_types::MerchantStatus;
use ratatui::{prelude::*, widgets::*};

/// Dark theme with a yellow accent
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub primary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Rgb(26, 26, 26),
            surface: Color::Rgb(30, 30, 30),
            text: Color::Rgb(243, 244, 246),
            muted: Color::Rgb(107, 114, 128),
            primary: Color::Rgb(234, 179, 8),
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(253, 224, 71),
            error: Color::Rgb(248, 113, 113),
            border: Color::Rgb(42, 42, 42),
            border_focused: Color::Rgb(234, 179, 8),
        }
    }
}

impl Theme {
    /// Bordered box around an input, highlighted when focused
    pub fn input_block(&self, label: &str, focused: bool) -> Block<'static> {
        let border = if focused { self.border_focused } else { self.border };
        Block::default()
            .title(Span::styled(label.to_string(), self.label_style()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(self.surface).fg(self.text))
    }

    /// Bordered advisory box
    pub fn notice_block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.primary))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(self.bg).fg(self.warning))
    }

    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::BOLD)
    }

    /// Filled button; focused buttons are inverted
    pub fn button_style(&self, color: Color, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.bg).bg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color).bg(self.surface).add_modifier(Modifier::BOLD)
        }
    }

    /// Colour of the status badge: active green, inactive red, anything else yellow
    pub fn status_color(&self, status: Option<MerchantStatus>) -> Color {
        match status {
            Some(MerchantStatus::Active) => self.success,
            Some(MerchantStatus::Inactive) => self.error,
            _ => self.warning,
        }
    }
}
