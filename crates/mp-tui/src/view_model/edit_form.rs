// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Transient edit form
//!
//! The form is built from the current record when edit mode starts and is
//! thrown away on both Cancel and Save. Nothing typed here ever flows back
//! into the record.

use mp_domain_types::{FieldKind, FieldSpec, MerchantRecord, MerchantStatus, ProfileSchema};
use ratatui::crossterm::event::KeyEvent;
use tui_textarea::TextArea;

/// Editor state of a single schema field
#[derive(Debug, Clone)]
pub enum FieldInput {
    Text {
        spec: &'static FieldSpec,
        textarea: TextArea<'static>,
    },
    Status {
        spec: &'static FieldSpec,
        selected: Option<MerchantStatus>,
    },
}

impl FieldInput {
    fn from_record(spec: &'static FieldSpec, record: &MerchantRecord) -> Self {
        match spec.kind {
            FieldKind::Text => {
                let value = record.display_value(spec.key).unwrap_or_default();
                let mut textarea = TextArea::new(vec![value]);
                textarea.move_cursor(tui_textarea::CursorMove::End);
                FieldInput::Text { spec, textarea }
            }
            FieldKind::Status => FieldInput::Status {
                spec,
                selected: record.status(),
            },
        }
    }

    pub fn spec(&self) -> &'static FieldSpec {
        match self {
            FieldInput::Text { spec, .. } | FieldInput::Status { spec, .. } => spec,
        }
    }

    /// Current contents as shown to the user
    pub fn value(&self) -> String {
        match self {
            FieldInput::Text { textarea, .. } => textarea.lines().join(""),
            FieldInput::Status { selected, .. } => {
                selected.map(|s| s.to_string()).unwrap_or_default()
            }
        }
    }
}

/// Focusable elements of the form, in tab order after the fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(usize),
    Cancel,
    Save,
}

#[derive(Debug, Clone)]
pub struct EditForm {
    inputs: Vec<FieldInput>,
    focus: FormFocus,
    /// First visible row of the form, maintained by the view
    pub scroll: u16,
}

impl EditForm {
    /// Pre-populate every schema field, optional ones included, from `record`
    pub fn from_record(schema: ProfileSchema, record: &MerchantRecord) -> Self {
        let inputs = schema
            .fields()
            .iter()
            .map(|spec| FieldInput::from_record(spec, record))
            .collect();
        Self {
            inputs,
            focus: FormFocus::Field(0),
            scroll: 0,
        }
    }

    pub fn inputs(&self) -> &[FieldInput] {
        &self.inputs
    }

    pub fn input_mut(&mut self, index: usize) -> Option<&mut FieldInput> {
        self.inputs.get_mut(index)
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Value of the field `key` as currently typed
    pub fn value(&self, key: &str) -> Option<String> {
        self.inputs.iter().find(|i| i.spec().key == key).map(FieldInput::value)
    }

    pub fn focus_field(&mut self, index: usize) {
        if index < self.inputs.len() {
            self.focus = FormFocus::Field(index);
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormFocus::Field(i) if i + 1 < self.inputs.len() => FormFocus::Field(i + 1),
            FormFocus::Field(_) => FormFocus::Cancel,
            FormFocus::Cancel => FormFocus::Save,
            FormFocus::Save if self.inputs.is_empty() => FormFocus::Cancel,
            FormFocus::Save => FormFocus::Field(0),
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            FormFocus::Field(0) => FormFocus::Save,
            FormFocus::Field(i) => FormFocus::Field(i - 1),
            FormFocus::Cancel if self.inputs.is_empty() => FormFocus::Save,
            FormFocus::Cancel => FormFocus::Field(self.inputs.len() - 1),
            FormFocus::Save => FormFocus::Cancel,
        };
    }

    fn focused_input_mut(&mut self) -> Option<&mut FieldInput> {
        match self.focus {
            FormFocus::Field(i) => self.inputs.get_mut(i),
            FormFocus::Cancel | FormFocus::Save => None,
        }
    }

    /// Whether the focused field is a status selector
    pub fn focus_is_status(&self) -> bool {
        matches!(
            self.focus,
            FormFocus::Field(i) if matches!(self.inputs.get(i), Some(FieldInput::Status { .. }))
        )
    }

    /// Step the focused status selector forwards or backwards
    pub fn cycle_status(&mut self, forward: bool) -> bool {
        match self.focused_input_mut() {
            Some(FieldInput::Status { selected, .. }) => {
                *selected = Some(match (*selected, forward) {
                    (None, _) => MerchantStatus::ALL[0],
                    (Some(s), true) => s.next(),
                    (Some(s), false) => s.previous(),
                });
                true
            }
            _ => false,
        }
    }

    /// Feed a key to the focused text input. Returns whether it was consumed.
    pub fn input_key(&mut self, key: KeyEvent) -> bool {
        match self.focused_input_mut() {
            Some(FieldInput::Text { textarea, .. }) => {
                textarea.input(key);
                true
            }
            _ => false,
        }
    }
}
