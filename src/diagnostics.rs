//! Startup smoke checks, logged and never fatal

use ratatui::{backend::TestBackend, layout::Rect, Terminal};

use crate::messages::RenderState;
use crate::models::Tab;
use crate::ui::{self, layout};

const CHECK_WIDTH: u16 = 80;
const CHECK_HEIGHT: u16 = 50;

/// Check the initial render state and log the result.
/// Returns the failed checks.
pub fn run_smoke_checks(state: &RenderState) -> Vec<String> {
    let mut failures = Vec::new();

    if state.days_left == 0 {
        failures.push(String::from("days left must be positive"));
    }

    match render_text(state) {
        Ok((screen, nav)) => {
            for tab in Tab::NAV {
                if !nav.contains(tab.label()) {
                    failures.push(format!("navigation tab missing: {}", tab.id()));
                }
            }
            if state.active_tab == Tab::Home && !screen.contains("(_)--(_)") {
                failures.push(String::from("vehicle picture missing"));
            }
        }
        Err(e) => failures.push(format!("render failed: {}", e)),
    }

    if failures.is_empty() {
        tracing::info!(tab = state.active_tab.id(), "Smoke checks passed");
    } else {
        tracing::warn!(?failures, "Smoke checks failed");
    }
    failures
}

fn render_text(state: &RenderState) -> std::io::Result<(String, String)> {
    let mut terminal = Terminal::new(TestBackend::new(CHECK_WIDTH, CHECK_HEIGHT))?;
    terminal.draw(|f| ui::draw_ui(f, state))?;
    let buffer = terminal.backend().buffer();

    let area = Rect::new(0, 0, CHECK_WIDTH, CHECK_HEIGHT);
    let nav = ui::region_text(buffer, layout::main_layout(area).nav);
    Ok((ui::buffer_text(buffer), nav))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use chrono::NaiveDate;

    #[test]
    fn test_initial_state_passes() {
        let state = AppState::new(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        assert!(run_smoke_checks(&state.to_render_state()).is_empty());
    }

    #[test]
    fn test_zero_days_left_fails() {
        let mut state = AppState::new(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()).to_render_state();
        state.days_left = 0;
        let failures = run_smoke_checks(&state);
        assert_eq!(failures, vec![String::from("days left must be positive")]);
    }
}
