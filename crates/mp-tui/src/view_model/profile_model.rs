// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Profile screen view model
//!
//! Owns the screen state machine:
//!
//! ```text
//! Loading ──► Loaded { Viewing } ⇄ Loaded { Editing }
//!        └──► Empty
//! ```
//!
//! All transitions happen on the UI task in response to `Msg`s. The load
//! itself runs in a `LoadTask` owned by the view model.

use mp_core::{LoadResolution, MerchantSource};
use mp_domain_types::{MerchantRecord, ProfileSchema, ProfileVariant};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::edit_form::{EditForm, FormFocus};
use super::load_task::LoadTask;

/// Braille spinner shown while loading
pub const SPINNER_FRAMES: [&str; 10] =
    ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Rows moved by PageUp / PageDown
const PAGE_ROWS: u16 = 10;

#[derive(Debug, Clone)]
pub enum ProfileMode {
    Viewing,
    Editing(EditForm),
}

#[derive(Debug, Clone)]
pub enum ProfileState {
    Loading,
    /// The service explicitly reported that there is no merchant
    Empty,
    Loaded {
        merchant: MerchantRecord,
        /// Why demo data is shown, when it is
        notice: Option<String>,
        mode: ProfileMode,
    },
}

/// Semantic targets of mouse clicks, registered by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    EditProfile,
    CancelEdit,
    SaveEdit,
    FocusField(usize),
}

/// Messages processed by `ProfileViewModel::update`
#[derive(Debug, Clone)]
pub enum Msg {
    Key(KeyEvent),
    MouseClick(MouseAction),
    MouseScrollUp,
    MouseScrollDown,
    /// Periodic timer tick driving the spinner
    Tick,
    MerchantLoaded(LoadResolution),
    Quit,
}

#[derive(Debug)]
pub struct ProfileViewModel {
    variant: ProfileVariant,
    state: ProfileState,
    load_task: Option<LoadTask>,
    load_rx: Option<mpsc::UnboundedReceiver<LoadResolution>>,
    spinner_frame: usize,
    /// First visible row of the read-only view
    scroll: u16,
    exit_requested: bool,
    pub needs_redraw: bool,
}

impl ProfileViewModel {
    /// A screen in the loading state with no load started
    pub fn new(variant: ProfileVariant) -> Self {
        Self {
            variant,
            state: ProfileState::Loading,
            load_task: None,
            load_rx: None,
            spinner_frame: 0,
            scroll: 0,
            exit_requested: false,
            needs_redraw: true,
        }
    }

    /// A screen that has already resolved its load
    pub fn with_resolution(variant: ProfileVariant, resolution: LoadResolution) -> Self {
        let mut vm = Self::new(variant);
        vm.apply_load(resolution);
        vm
    }

    /// Start the single load. Must be called from within a Tokio runtime.
    pub fn start_loading(&mut self, source: Arc<dyn MerchantSource>) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.load_task = Some(LoadTask::spawn(source, self.variant.mock_record(), tx));
        self.load_rx = Some(rx);
        self.state = ProfileState::Loading;
        self.needs_redraw = true;
    }

    /// Wait for the load to resolve.
    ///
    /// Pends forever when no load is in flight, so it can sit in a `select!`.
    pub async fn next_load(&mut self) -> Option<LoadResolution> {
        match self.load_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => std::future::pending().await,
        }
    }

    /// Apply a finished load without waiting. Returns whether one was applied.
    pub fn poll_load(&mut self) -> bool {
        let resolution = match self.load_rx.as_mut().map(|rx| rx.try_recv()) {
            Some(Ok(resolution)) => resolution,
            _ => return false,
        };
        self.apply_load(resolution);
        true
    }

    pub fn update(&mut self, msg: Msg) {
        let changed = match msg {
            Msg::Key(key) => {
                matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
                    && self.handle_key_event(key)
            }
            Msg::MouseClick(action) => self.handle_mouse_click(action),
            Msg::MouseScrollUp => self.scroll_by(-1),
            Msg::MouseScrollDown => self.scroll_by(1),
            Msg::Tick => self.tick(),
            Msg::MerchantLoaded(resolution) => {
                self.apply_load(resolution);
                true
            }
            Msg::Quit => {
                self.exit_requested = true;
                false
            }
        };
        if changed {
            self.needs_redraw = true;
        }
    }

    fn apply_load(&mut self, resolution: LoadResolution) {
        if !matches!(self.state, ProfileState::Loading) {
            debug!("Ignoring load result, screen already resolved");
            return;
        }

        self.state = match resolution {
            LoadResolution::Loaded { merchant, notice } => ProfileState::Loaded {
                merchant,
                notice,
                mode: ProfileMode::Viewing,
            },
            LoadResolution::NoData => ProfileState::Empty,
        };
        self.load_task = None;
        self.load_rx = None;
        self.needs_redraw = true;
    }

    fn tick(&mut self) -> bool {
        if matches!(self.state, ProfileState::Loading) {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
            true
        } else {
            false
        }
    }

    /// Enter edit mode with a form built from the current record
    pub fn begin_edit(&mut self) -> bool {
        let schema = self.schema();
        match &mut self.state {
            ProfileState::Loaded { merchant, mode, .. } if matches!(mode, ProfileMode::Viewing) => {
                *mode = ProfileMode::Editing(EditForm::from_record(schema, merchant));
                debug!("Entered edit mode");
                true
            }
            _ => false,
        }
    }

    /// Leave edit mode discarding the form
    pub fn cancel_edit(&mut self) -> bool {
        if self.leave_edit() {
            debug!("Edit cancelled");
            true
        } else {
            false
        }
    }

    /// Leave edit mode. Nothing is persisted and the record is unchanged.
    pub fn save_edit(&mut self) -> bool {
        if self.leave_edit() {
            info!("Save requested; profile edits are not persisted");
            true
        } else {
            false
        }
    }

    fn leave_edit(&mut self) -> bool {
        match &mut self.state {
            ProfileState::Loaded { mode, .. } if matches!(mode, ProfileMode::Editing(_)) => {
                *mode = ProfileMode::Viewing;
                true
            }
            _ => false,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.exit_requested = true;
            return false;
        }

        if self.is_editing() {
            return self.handle_edit_key(key);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.exit_requested = true;
                false
            }
            KeyCode::Char('e') | KeyCode::Enter => self.begin_edit(),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(PAGE_ROWS as i32)),
            KeyCode::PageDown => self.scroll_by(PAGE_ROWS as i32),
            KeyCode::Home => self.scroll_by(-(u16::MAX as i32)),
            _ => false,
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return self.save_edit();
        }

        match key.code {
            KeyCode::Esc => return self.cancel_edit(),
            KeyCode::Enter => {
                return match self.edit_form().map(EditForm::focus) {
                    Some(FormFocus::Cancel) => self.cancel_edit(),
                    Some(FormFocus::Save) => self.save_edit(),
                    _ => self.with_form(EditForm::focus_next),
                };
            }
            _ => {}
        }

        let Some(form) = self.edit_form_mut() else {
            return false;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
            KeyCode::Left | KeyCode::Right if form.focus_is_status() => {
                return form.cycle_status(key.code == KeyCode::Right);
            }
            _ => return form.input_key(key),
        }
        true
    }

    fn handle_mouse_click(&mut self, action: MouseAction) -> bool {
        match action {
            MouseAction::EditProfile => self.begin_edit(),
            MouseAction::CancelEdit => self.cancel_edit(),
            MouseAction::SaveEdit => self.save_edit(),
            MouseAction::FocusField(index) => self.with_form(|form| form.focus_field(index)),
        }
    }

    fn with_form(&mut self, f: impl FnOnce(&mut EditForm)) -> bool {
        match self.edit_form_mut() {
            Some(form) => {
                f(form);
                true
            }
            None => false,
        }
    }

    fn scroll_by(&mut self, delta: i32) -> bool {
        let before = self.scroll;
        self.scroll = (self.scroll as i32 + delta).clamp(0, u16::MAX as i32) as u16;
        self.scroll != before
    }

    /// Keep the read-only scroll offset within the rendered content
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }

    pub fn take_exit_request(&mut self) -> bool {
        std::mem::take(&mut self.exit_requested)
    }

    pub fn variant(&self) -> ProfileVariant {
        self.variant
    }

    pub fn schema(&self) -> ProfileSchema {
        self.variant.schema()
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ProfileState::Loading)
    }

    pub fn is_editing(&self) -> bool {
        matches!(
            self.state,
            ProfileState::Loaded {
                mode: ProfileMode::Editing(_),
                ..
            }
        )
    }

    pub fn merchant(&self) -> Option<&MerchantRecord> {
        match &self.state {
            ProfileState::Loaded { merchant, .. } => Some(merchant),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match &self.state {
            ProfileState::Loaded { notice, .. } => notice.as_deref(),
            _ => None,
        }
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        match &self.state {
            ProfileState::Loaded {
                mode: ProfileMode::Editing(form),
                ..
            } => Some(form),
            _ => None,
        }
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut EditForm> {
        match &mut self.state {
            ProfileState::Loaded {
                mode: ProfileMode::Editing(form),
                ..
            } => Some(form),
            _ => None,
        }
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Whether a load task is still attached
    pub fn has_pending_load(&self) -> bool {
        self.load_task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_vm() -> ProfileViewModel {
        let variant = ProfileVariant::Business;
        ProfileViewModel::with_resolution(
            variant,
            LoadResolution::Loaded {
                merchant: variant.mock_record(),
                notice: None,
            },
        )
    }

    fn key(code: KeyCode) -> Msg {
        Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn editing_requires_a_merchant() {
        let mut vm = ProfileViewModel::new(ProfileVariant::Business);
        assert!(!vm.begin_edit());
        assert!(!vm.is_editing());

        let mut vm =
            ProfileViewModel::with_resolution(ProfileVariant::Business, LoadResolution::NoData);
        vm.update(key(KeyCode::Char('e')));
        assert!(!vm.is_editing());
    }

    #[test]
    fn second_resolution_is_ignored() {
        let mut vm = loaded_vm();
        vm.update(Msg::MerchantLoaded(LoadResolution::NoData));
        assert!(vm.merchant().is_some());
    }

    #[test]
    fn spinner_only_advances_while_loading() {
        let mut vm = ProfileViewModel::new(ProfileVariant::Business);
        let first = vm.spinner_frame();
        vm.update(Msg::Tick);
        assert_ne!(vm.spinner_frame(), first);

        let mut vm = loaded_vm();
        vm.needs_redraw = false;
        vm.update(Msg::Tick);
        assert!(!vm.needs_redraw);
    }

    #[test]
    fn enter_on_save_button_leaves_edit_mode() {
        let mut vm = loaded_vm();
        vm.update(key(KeyCode::Char('e')));
        vm.update(key(KeyCode::BackTab));
        assert_eq!(vm.edit_form().map(EditForm::focus), Some(FormFocus::Save));
        vm.update(key(KeyCode::Enter));
        assert!(!vm.is_editing());
    }

    #[test]
    fn scroll_never_goes_negative() {
        let mut vm = loaded_vm();
        vm.update(key(KeyCode::Up));
        assert_eq!(vm.scroll(), 0);
        vm.update(key(KeyCode::PageDown));
        assert_eq!(vm.scroll(), PAGE_ROWS);
        vm.clamp_scroll(4);
        assert_eq!(vm.scroll(), 4);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut vm = loaded_vm();
        let mut release = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        vm.update(Msg::Key(release));
        assert!(!vm.is_editing());
    }
}
