// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Terminal setup and restoration
//!
//! Every mode we switch on is recorded in a flag so `cleanup_terminal` can
//! undo exactly those, once, whether it runs from the normal exit path, the
//! Ctrl-C handler or the panic hook.

use crossterm::{
    ExecutableCommand,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{
    io, panic,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

static CLEANUP_DONE: AtomicBool = AtomicBool::new(false);

static RAW_MODE_ENABLED: AtomicBool = AtomicBool::new(false);
static ALTERNATE_SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);
static KB_FLAGS_PUSHED: AtomicBool = AtomicBool::new(false);
static MOUSE_CAPTURE_ENABLED: AtomicBool = AtomicBool::new(false);

/// Terminal setup configuration
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    pub raw_mode: bool,
    pub alternate_screen: bool,
    /// Disambiguate Esc from escape sequences where the terminal supports it
    pub keyboard_enhancement: bool,
    pub mouse_capture: bool,
    /// Install Ctrl-C and panic handlers that restore the terminal
    pub install_signal_handlers: bool,
    /// Cleared by the Ctrl-C handler so the event loop can stop
    pub running_flag: Option<Arc<AtomicBool>>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            raw_mode: true,
            alternate_screen: true,
            keyboard_enhancement: true,
            mouse_capture: true,
            install_signal_handlers: true,
            running_flag: None,
        }
    }
}

impl TerminalConfig {
    pub fn with_running_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.running_flag = Some(flag);
        self
    }

    pub fn without_signal_handlers(mut self) -> Self {
        self.install_signal_handlers = false;
        self
    }
}

/// Prepare the terminal for the interactive screen
pub fn setup_terminal(config: TerminalConfig) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    if config.raw_mode {
        crossterm::terminal::enable_raw_mode()?;
        RAW_MODE_ENABLED.store(true, Ordering::SeqCst);
    }

    if config.alternate_screen {
        stdout.execute(EnterAlternateScreen)?;
        ALTERNATE_SCREEN_ACTIVE.store(true, Ordering::SeqCst);
    }

    if config.keyboard_enhancement
        && crossterm::terminal::supports_keyboard_enhancement().unwrap_or(false)
    {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES,
        ))?;
        KB_FLAGS_PUSHED.store(true, Ordering::SeqCst);
    }

    if config.mouse_capture {
        stdout.execute(EnableMouseCapture)?;
        MOUSE_CAPTURE_ENABLED.store(true, Ordering::SeqCst);
    }

    if config.install_signal_handlers {
        let running = config.running_flag.clone();
        ctrlc::set_handler(move || {
            cleanup_terminal();
            if let Some(running) = &running {
                running.store(false, Ordering::SeqCst);
            }
        })?;

        let default_panic = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            cleanup_terminal();
            default_panic(panic_info);
        }));
    }

    Ok(())
}

/// Restore the terminal. Safe to call more than once.
pub fn cleanup_terminal() {
    if CLEANUP_DONE.swap(true, Ordering::SeqCst) {
        return;
    }

    let mut stdout = io::stdout();

    // Keyboard flags must be popped while still on the alternate screen
    if KB_FLAGS_PUSHED.swap(false, Ordering::SeqCst) {
        let _ = stdout.execute(PopKeyboardEnhancementFlags);
    }

    if MOUSE_CAPTURE_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = stdout.execute(DisableMouseCapture);
    }

    if RAW_MODE_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = crossterm::terminal::disable_raw_mode();
    }

    if ALTERNATE_SCREEN_ACTIVE.swap(false, Ordering::SeqCst) {
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}
