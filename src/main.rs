//! Courier Leasing - actor-based terminal demo
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Service Layer (Tokio) - simulated submissions and clipboard

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use courier_leasing::config::Settings;
use courier_leasing::constants::APP_VERSION;
use courier_leasing::messages::ui_events::{key_to_ui_event, mouse_to_ui_event};
use courier_leasing::messages::{RenderState, ServiceCommand, ServiceResponse, UiEvent};
use courier_leasing::service::{Osc52Clipboard, ServiceActor, SimulatedSubmission};
use courier_leasing::ui::{draw_ui, ToastClock};
use courier_leasing::AppActor;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (settings, config_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", &settings.log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    tracing::info!(version = APP_VERSION, "Starting Courier Leasing");
    if let Some(e) = config_error {
        tracing::warn!("Failed to load settings, using defaults: {:#}", e);
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (service_cmd_tx, service_cmd_rx) = mpsc::unbounded_channel::<ServiceCommand>();
    let (service_resp_tx, service_resp_rx) = mpsc::unbounded_channel::<ServiceResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn service actor
    let service_actor = ServiceActor::new(
        SimulatedSubmission::new(settings.submission.clone()),
        Osc52Clipboard::new(settings.clipboard),
        service_resp_tx,
    );
    tokio::spawn(service_actor.run(service_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(service_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, service_resp_rx));

    run_ui_loop(&mut terminal, ui_tx, &mut render_rx, settings.toast_duration()).await?;

    tracing::info!("Exiting");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
    toast_duration: Duration,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let mut toast_clock = ToastClock::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            let event = match event::read()? {
                Event::Key(key) => key_to_ui_event(key, &current_state),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    mouse_to_ui_event(mouse, area, &current_state)
                }
                _ => None,
            };

            if let Some(event) = event {
                if matches!(event, UiEvent::Quit) {
                    let _ = ui_tx.send(event);
                    break;
                }
                let _ = ui_tx.send(event);
            }
        }

        if let Some(id) = toast_clock.tick(current_state.toast(), Instant::now(), toast_duration) {
            let _ = ui_tx.send(UiEvent::ToastAnimationEnd(id));
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}
