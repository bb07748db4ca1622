//! UI layer - draws a RenderState snapshot; holds no application state

pub mod components;
pub mod forms;
pub mod layout;
pub mod sections;

use std::time::{Duration, Instant};

use ratatui::{buffer::Buffer, prelude::*, widgets::*};

use crate::app::overlays::Toast;
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::{OverlayKind, Tab};
use components::palette;

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    let main = layout::main_layout(area);

    components::draw_status_strip(f, main.status, status_hints(state));
    components::draw_header(f, main.header, state.days_left);
    draw_nav(f, area, state.active_tab);
    draw_section(f, main.content, state);
    components::draw_bottom_bar(f, area);

    for kind in [OverlayKind::Issue, OverlayKind::Update, OverlayKind::Refer] {
        if state.overlays.is_open(kind) {
            draw_overlay(f, area, state, kind);
        }
    }

    if let Some(toast) = state.toast() {
        components::draw_toast(f, area, &toast.message);
    }
}

fn status_hints(state: &RenderState) -> &'static str {
    if state.input_mode == InputMode::Editing {
        " Esc: lopeta muokkaus | ←/→: kursori "
    } else if state.top_overlay().is_some() {
        " Esc: sulje | Tab: seuraava kenttä | s: lähetä "
    } else {
        " 1-4: osiot | p: profiili | b: ilmoitukset | q: lopeta "
    }
}

fn draw_nav(f: &mut Frame, area: Rect, active: Tab) {
    for (tab, rect) in layout::nav_tab_rects(area) {
        let style = if tab == active {
            Style::default().fg(Color::White).bg(palette::PRIMARY).bold()
        } else {
            Style::default().fg(palette::MUTED)
        };
        f.render_widget(Paragraph::new(layout::nav_tab_text(tab)).style(style), rect);
    }
}

fn draw_section(f: &mut Frame, area: Rect, state: &RenderState) {
    match state.active_tab {
        Tab::Home => sections::draw_home(f, area, state),
        Tab::Profile => sections::draw_profile(f, area, state),
        Tab::Issue | Tab::Update | Tab::Application => {
            let block = components::card(state.active_tab.label());
            let inner = block.inner(area);
            f.render_widget(block, area);

            if let Some(form) = &state.section_form {
                let editing = state.input_mode == InputMode::Editing && state.top_overlay().is_none();
                forms::draw_form(f, inner, form, state.auth_ready, editing);
            }
        }
    }
}

fn draw_overlay(f: &mut Frame, area: Rect, state: &RenderState, kind: OverlayKind) {
    let inner = components::draw_modal_shell(f, area, kind.title());
    match state.overlays.form(kind) {
        Some(form) => {
            let editing =
                state.input_mode == InputMode::Editing && state.top_overlay() == Some(kind);
            forms::draw_form(f, inner, form, state.auth_ready, editing);
        }
        None => forms::draw_referral(f, inner),
    }
}

/// Times the visible toast and reports when its display period is over
#[derive(Debug, Default)]
pub struct ToastClock {
    current: Option<(u64, Instant)>,
    ended: Option<u64>,
}

impl ToastClock {
    /// Returns the toast id once, when it has been shown for `duration`
    pub fn tick(&mut self, toast: Option<&Toast>, now: Instant, duration: Duration) -> Option<u64> {
        let Some(toast) = toast else {
            self.current = None;
            return None;
        };

        let since = match self.current {
            Some((id, since)) if id == toast.id => since,
            _ => {
                self.current = Some((toast.id, now));
                now
            }
        };

        if self.ended != Some(toast.id) && now.saturating_duration_since(since) >= duration {
            self.ended = Some(toast.id);
            return Some(toast.id);
        }
        None
    }
}

/// Whole buffer as text, one line per row
pub fn buffer_text(buffer: &Buffer) -> String {
    region_text(buffer, buffer.area)
}

/// Text inside `rect`, one line per row
pub fn region_text(buffer: &Buffer, rect: Rect) -> String {
    let rect = rect.intersection(buffer.area);
    let mut rows = Vec::with_capacity(rect.height as usize);
    for y in rect.top()..rect.bottom() {
        let row: String = (rect.left()..rect.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        rows.push(row);
    }
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::messages::ui_events::mouse_to_ui_event;
    use crate::messages::UiEvent;
    use chrono::NaiveDate;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::backend::TestBackend;

    const AREA: Rect = Rect { x: 0, y: 0, width: 80, height: 50 };

    fn app() -> AppState {
        AppState::new(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap())
    }

    fn render(state: &RenderState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn content_text(state: &RenderState) -> String {
        region_text(&render(state), layout::main_layout(AREA).content)
    }

    #[test]
    fn test_initial_render_shows_home() {
        let state = app().to_render_state();
        let buffer = render(&state);
        let screen = buffer_text(&buffer);

        let nav = region_text(&buffer, layout::main_layout(AREA).nav);
        for tab in Tab::NAV {
            assert!(nav.contains(tab.label()), "missing tab {}", tab.label());
        }
        assert!(screen.contains("Jäljellä 8 kk 15 pv"));
        assert!(screen.contains("(_)--(_)"));
        assert!(screen.contains("Toyota Yaris"));
        assert!(screen.contains("Profiili (p)"));
    }

    #[test]
    fn test_each_section_renders_only_its_content() {
        let markers = [
            (Tab::Home, "Autoni"),
            (Tab::Issue, "Vian tyyppi"),
            (Tab::Update, "Toivottu malli"),
            (Tab::Application, "Henkilötunnus"),
            (Tab::Profile, "Asiakasprofiili"),
        ];

        for (tab, _) in markers {
            let (state, _) = app().apply(UiEvent::SelectTab(tab));
            let content = content_text(&state.to_render_state());
            for (other, marker) in markers {
                assert_eq!(
                    content.contains(marker),
                    other == tab,
                    "{:?} section and marker {:?}",
                    tab,
                    marker
                );
            }
        }
    }

    #[test]
    fn test_backdrop_click_closes_modal() {
        let (state, _) = app().apply(UiEvent::OpenOverlay(OverlayKind::Update));
        let screen = buffer_text(&render(&state.to_render_state()));
        assert!(screen.contains("Päivitä sopimus"));
        assert!(screen.contains("Toivottu malli"));

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 25,
            modifiers: KeyModifiers::NONE,
        };
        let event = mouse_to_ui_event(click, AREA, &state.to_render_state());
        assert_eq!(event, Some(UiEvent::CloseOverlay(OverlayKind::Update)));

        let (state, _) = state.apply(UiEvent::CloseOverlay(OverlayKind::Update));
        let screen = buffer_text(&render(&state.to_render_state()));
        assert!(!screen.contains("Toivottu malli"));
    }

    #[test]
    fn test_referral_modal_shows_link() {
        let (state, _) = app().apply(UiEvent::OpenOverlay(OverlayKind::Refer));
        let screen = buffer_text(&render(&state.to_render_state()));
        assert!(screen.contains("Suosittele kaverille"));
        assert!(screen.contains("suosittele?code=ABC123"));
        assert!(screen.contains("[c] Kopioi"));
    }

    #[test]
    fn test_application_submit_disabled_until_auth() {
        let (state, _) = app().apply(UiEvent::SelectTab(Tab::Application));
        let content = content_text(&state.to_render_state());
        assert!(content.contains("Tunnistaudu"));
        assert!(content.contains("Ota käyttöön vahva tunnistautuminen"));

        let (state, _) = state.apply(UiEvent::ToggleAuth);
        let content = content_text(&state.to_render_state());
        assert!(content.contains("[s] Lähetä hakemus"));
        assert!(!content.contains("Ota käyttöön"));
    }

    #[test]
    fn test_toast_is_drawn() {
        let mut state = app();
        state.overlays.show_toast("Linkki kopioitu");
        let screen = buffer_text(&render(&state.to_render_state()));
        assert!(screen.contains("Linkki kopioitu"));
    }

    #[test]
    fn test_toast_clock_reports_once() {
        let mut clock = ToastClock::default();
        let toast = Toast { id: 1, message: String::from("hei") };
        let start = Instant::now();
        let duration = Duration::from_millis(2500);

        assert_eq!(clock.tick(Some(&toast), start, duration), None);
        assert_eq!(clock.tick(Some(&toast), start + Duration::from_secs(1), duration), None);
        assert_eq!(clock.tick(Some(&toast), start + duration, duration), Some(1));
        assert_eq!(clock.tick(Some(&toast), start + Duration::from_secs(4), duration), None);
    }

    #[test]
    fn test_toast_clock_restarts_on_replacement() {
        let mut clock = ToastClock::default();
        let first = Toast { id: 1, message: String::from("a") };
        let second = Toast { id: 2, message: String::from("b") };
        let start = Instant::now();
        let duration = Duration::from_millis(2500);

        clock.tick(Some(&first), start, duration);
        let later = start + Duration::from_secs(2);
        assert_eq!(clock.tick(Some(&second), later, duration), None);
        assert_eq!(clock.tick(Some(&second), start + Duration::from_secs(3), duration), None);
        assert_eq!(clock.tick(Some(&second), later + duration, duration), Some(2));
        assert_eq!(clock.tick(None, later + duration, duration), None);
    }
}
