// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Event loop of the interactive profile screen
//!
//! Terminal events are read on a dedicated thread and forwarded over a
//! channel; everything else (the load result, the spinner tick, state
//! updates and drawing) happens on the calling task.

use crossterm::event::{Event, MouseButton, MouseEventKind};
use mp_core::MerchantSource;
use mp_domain_types::ProfileVariant;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::{
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::Duration,
};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace};

use crate::{
    terminal::{self, TerminalConfig},
    theme::Theme,
    view::{self, HitTestRegistry},
    view_model::{MouseAction, Msg, ProfileViewModel},
};

/// Settings for one run of the screen
#[derive(Debug, Clone)]
pub struct ProfileScreenOptions {
    pub variant: ProfileVariant,
    /// Spinner and redraw cadence
    pub tick: Duration,
}

/// Run the profile screen until the user quits
pub async fn run_profile_screen(
    source: Arc<dyn MerchantSource>,
    options: ProfileScreenOptions,
) -> anyhow::Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    terminal::setup_terminal(TerminalConfig::default().with_running_flag(running.clone()))?;

    let result = event_loop(source, options, running).await;

    terminal::cleanup_terminal();
    result
}

async fn event_loop(
    source: Arc<dyn MerchantSource>,
    options: ProfileScreenOptions,
    running: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    let theme = Theme::default();
    let mut hit_registry: HitTestRegistry<MouseAction> = HitTestRegistry::new();

    info!(source = %source.describe(), variant = %options.variant, "Starting profile screen");
    let mut view_model = ProfileViewModel::new(options.variant);
    view_model.start_loading(source);

    let (tx_ev, mut rx_ev) = mpsc::unbounded_channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = crossterm::event::read() {
            if tx_ev.send(ev).is_err() {
                break;
            }
        }
    });

    let mut ticker = tokio::time::interval(options.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        if view_model.needs_redraw {
            terminal.draw(|frame| view::render(frame, &mut view_model, &theme, &mut hit_registry))?;
            view_model.needs_redraw = false;
        }

        if !running.load(Ordering::SeqCst) {
            break;
        }

        tokio::select! {
            biased;

            ev = rx_ev.recv() => {
                let Some(ev) = ev else { break };
                handle_event(&mut view_model, &hit_registry, ev);
            }
            Some(resolution) = view_model.next_load() => {
                debug!("Merchant load resolved");
                view_model.update(Msg::MerchantLoaded(resolution));
            }
            _ = ticker.tick() => {
                view_model.update(Msg::Tick);
            }
        }

        if view_model.take_exit_request() {
            debug!("Exit requested");
            break;
        }
    }

    Ok(())
}

fn handle_event(
    view_model: &mut ProfileViewModel,
    hit_registry: &HitTestRegistry<MouseAction>,
    ev: Event,
) {
    match ev {
        Event::Key(key) => {
            trace!(key_code = ?key.code, modifiers = ?key.modifiers, kind = ?key.kind, "Key event");
            view_model.update(Msg::Key(key));
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(hit) = hit_registry.hit_test(mouse.column, mouse.row) {
                    view_model.update(Msg::MouseClick(hit.action));
                }
            }
            MouseEventKind::ScrollUp => view_model.update(Msg::MouseScrollUp),
            MouseEventKind::ScrollDown => view_model.update(Msg::MouseScrollDown),
            _ => {}
        },
        Event::Resize(_, _) => view_model.needs_redraw = true,
        _ => {}
    }
}
