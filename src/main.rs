//! CamDeck TUI - actor-based surveillance console
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - single state owner processing intents

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use camdeck_tui::input::{route_key, route_mouse};
use camdeck_tui::{panels, ActorHandle, ConsoleConfig, Intent, PanelState, RenderState};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::load().context("failed to load configuration")?;

    // Initialize logging to file
    let log_dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| ".".into());
    let log_name = config
        .log_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| camdeck_tui::constants::DEFAULT_LOG_FILE.into());
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = config.into_state()?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Spawn app actor
    let mut actor = ActorHandle::spawn(state);

    // Run UI loop (synchronous with async polling)
    let ui_result = run_ui_loop(&mut terminal, &mut actor).await;

    // An actor panic outranks the UI error it causes
    actor.join().await?;
    ui_result
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    actor: &mut ActorHandle,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let mut panel_state = PanelState::default();

    loop {
        panel_state.sync(&current_state);

        // Draw with current state
        let frame_area = terminal
            .draw(|f| panels::draw(f, &current_state, &panel_state))?
            .area;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            let intent = match event::read()? {
                Event::Key(key) => route_key(key, &current_state, &mut panel_state),
                Event::Mouse(mouse) => route_mouse(mouse, frame_area, &current_state, &mut panel_state),
                _ => None,
            };
            if let Some(intent) = intent {
                let quit = matches!(intent, Intent::Quit);
                actor.send(intent)?;
                if quit {
                    break;
                }
            }
        }

        // Let the actor task run, then pick up state updates (non-blocking)
        tokio::task::yield_now().await;
        if let Some(state) = actor.latest()? {
            current_state = state;
        }
    }

    Ok(())
}
