//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::forms::{Control, FieldKind, FormState};
use crate::messages::RenderState;
use crate::models::{OverlayKind, Tab};
use crate::ui::layout;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // View router
    SelectTab(Tab),
    OpenProfile,
    StartApplication,

    // Overlays
    OpenOverlay(OverlayKind),
    CloseOverlay(OverlayKind),
    RingBell,
    ToastAnimationEnd(u64),

    // Form focus
    NextField,
    PrevField,
    CycleOption { forward: bool },

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Form actions
    ToggleAuth,
    Submit,

    // Referral
    CopyReferralLink,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if state.input_mode == InputMode::Editing {
        let multiline = state
            .focused_form()
            .and_then(FormState::focused_text_field)
            .is_some_and(|f| f.kind == FieldKind::Multiline);
        return handle_editing_keys(key, multiline);
    }

    // The top overlay captures the keyboard
    if let Some(kind) = state.top_overlay() {
        if key.code == KeyCode::Esc {
            return Some(UiEvent::CloseOverlay(kind));
        }
        return match kind {
            OverlayKind::Refer => match key.code {
                KeyCode::Char('c') | KeyCode::Enter => Some(UiEvent::CopyReferralLink),
                _ => None,
            },
            OverlayKind::Issue | OverlayKind::Update => state
                .overlays
                .form(kind)
                .and_then(|form| handle_form_keys(key, form)),
        };
    }

    match key.code {
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            return Some(UiEvent::SelectTab(Tab::NAV[index]));
        }
        KeyCode::Char('p') => return Some(UiEvent::OpenProfile),
        KeyCode::Char('b') => return Some(UiEvent::RingBell),
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        _ => {}
    }

    match state.active_tab {
        Tab::Home => handle_home_keys(key),
        Tab::Profile => None,
        Tab::Issue | Tab::Update | Tab::Application => state
            .section_form
            .as_ref()
            .and_then(|form| handle_form_keys(key, form)),
    }
}

/// Home section actions
fn handle_home_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('u') => Some(UiEvent::OpenOverlay(OverlayKind::Update)),
        KeyCode::Char('i') => Some(UiEvent::OpenOverlay(OverlayKind::Issue)),
        KeyCode::Char('r') => Some(UiEvent::OpenOverlay(OverlayKind::Refer)),
        KeyCode::Char('a') => Some(UiEvent::StartApplication),
        _ => None,
    }
}

/// Keys for a focused form in normal mode
fn handle_form_keys(key: KeyEvent, form: &FormState) -> Option<UiEvent> {
    let control = form.focused_control();
    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevField),
        KeyCode::Char('s') => Some(UiEvent::Submit),
        KeyCode::Left if is_select(control) => Some(UiEvent::CycleOption { forward: false }),
        KeyCode::Right if is_select(control) => Some(UiEvent::CycleOption { forward: true }),
        KeyCode::Char('e') if form.focused_text_field().is_some() => Some(UiEvent::StartEditing),
        KeyCode::Enter | KeyCode::Char(' ') => match control {
            Control::Field(spec) if spec.is_editable_text() => Some(UiEvent::StartEditing),
            Control::Field(_) => Some(UiEvent::CycleOption { forward: true }),
            Control::AuthToggle => Some(UiEvent::ToggleAuth),
            Control::Submit => Some(UiEvent::Submit),
        },
        _ => None,
    }
}

fn is_select(control: Control) -> bool {
    matches!(control, Control::Field(spec) if matches!(spec.kind, FieldKind::Select(_)))
}

/// Keys while editing a text field
fn handle_editing_keys(key: KeyEvent, multiline: bool) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::StopEditing),
        KeyCode::Enter if multiline => Some(UiEvent::CharInput('\n')),
        KeyCode::Enter | KeyCode::Tab => Some(UiEvent::StopEditing),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}

/// Convert a mouse click to a UiEvent.
///
/// With an overlay open, a click on its backdrop or its close button closes
/// it and a click inside the modal is swallowed. Otherwise clicks on the
/// navigation bar select tabs.
pub fn mouse_to_ui_event(mouse: MouseEvent, area: Rect, state: &RenderState) -> Option<UiEvent> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (column, row) = (mouse.column, mouse.row);

    if let Some(kind) = state.top_overlay() {
        let modal = layout::modal_area(area);
        let close = layout::modal_close_button(modal);
        if layout::contains(close, column, row) || !layout::contains(modal, column, row) {
            return Some(UiEvent::CloseOverlay(kind));
        }
        return None;
    }

    if state.input_mode == InputMode::Editing {
        return None;
    }

    if let Some(tab) = layout::tab_at(area, column, row) {
        return Some(UiEvent::SelectTab(tab));
    }
    if layout::profile_button_hit(area, column, row) {
        return Some(UiEvent::OpenProfile);
    }
    None
}
