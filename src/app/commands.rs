//! Command handlers - state transitions for UI events and service responses
//!
//! `apply` and `on_service_response` take the state by value and hand back
//! the next state together with the service commands it asks for.

use crate::app::state::FormSlot;
use crate::app::AppState;
use crate::constants::{REFERRAL_LINK, TOAST_NO_NOTIFICATIONS, TOAST_SUBMIT_FAILED};
use crate::forms::FormState;
use crate::messages::ui_events::InputMode;
use crate::messages::{ServiceCommand, ServiceResponse, UiEvent};
use crate::models::{ClipboardOutcome, OverlayKind, SubmissionOutcome, Tab};

impl AppState {
    /// Apply a UI event
    pub fn apply(mut self, event: UiEvent) -> (Self, Vec<ServiceCommand>) {
        let mut commands = Vec::new();

        match event {
            // View router
            UiEvent::SelectTab(tab) => commands.extend(self.select_tab(tab)),
            UiEvent::OpenProfile => commands.extend(self.select_tab(Tab::Profile)),
            UiEvent::StartApplication => commands.extend(self.select_tab(Tab::Application)),

            // Overlays
            UiEvent::OpenOverlay(kind) => self.open_overlay(kind),
            UiEvent::CloseOverlay(kind) => commands.extend(self.close_overlay(kind)),
            UiEvent::RingBell => {
                self.overlays.show_toast(TOAST_NO_NOTIFICATIONS);
            }
            UiEvent::ToastAnimationEnd(id) => {
                self.overlays.toast_animation_end(id);
            }

            // Form focus
            UiEvent::NextField => self.with_form(FormState::focus_next),
            UiEvent::PrevField => self.with_form(FormState::focus_prev),
            UiEvent::CycleOption { forward } => self.with_form(|f| f.cycle_option(forward)),

            // Input editing
            UiEvent::StartEditing => self.start_editing(),
            UiEvent::StopEditing => self.stop_editing(),
            UiEvent::CharInput(c) => self.with_editing_form(|f| f.insert_char(c)),
            UiEvent::Backspace => self.with_editing_form(FormState::delete_char),
            UiEvent::CursorLeft => self.with_editing_form(FormState::cursor_left),
            UiEvent::CursorRight => self.with_editing_form(FormState::cursor_right),

            // Form actions
            UiEvent::ToggleAuth => self.toggle_auth(),
            UiEvent::Submit => commands.extend(self.submit_focused_form()),

            UiEvent::CopyReferralLink => commands.extend(self.copy_referral_link()),

            // Handled by the actor loop
            UiEvent::Quit => {}
        }

        (self, commands)
    }

    /// Apply a response from the service layer
    pub fn on_service_response(mut self, response: ServiceResponse) -> (Self, Vec<ServiceCommand>) {
        match response {
            ServiceResponse::Submitted { id, outcome } => self.finish_submission(id, outcome),
            ServiceResponse::Cancelled { id } => {
                tracing::debug!(id, "Submission cancelled");
            }
            ServiceResponse::ClipboardWritten { outcome } => {
                if let ClipboardOutcome::Denied(reason) = &outcome {
                    tracing::warn!(%reason, "Clipboard write denied");
                }
                self.overlays.show_toast(outcome.message());
            }
        }
        (self, Vec::new())
    }

    // ========================
    // View router
    // ========================

    /// Switch section. The previous section's form instance is dropped.
    pub fn select_tab(&mut self, tab: Tab) -> Option<ServiceCommand> {
        if self.active_tab == tab {
            return None;
        }
        let previous = self.section_form.take();
        self.active_tab = tab;
        self.section_form = tab.form().map(FormState::new);
        self.input_mode = InputMode::Normal;
        tracing::debug!(tab = tab.id(), "Selected tab");

        previous
            .and_then(|form| form.pending_submission())
            .map(ServiceCommand::CancelSubmission)
    }

    // ========================
    // Overlays
    // ========================

    pub fn open_overlay(&mut self, kind: OverlayKind) {
        if self.overlays.open(kind) {
            self.input_mode = InputMode::Normal;
            tracing::debug!(?kind, "Opened overlay");
        }
    }

    /// Close a modal; a submission still pending in its form is cancelled
    pub fn close_overlay(&mut self, kind: OverlayKind) -> Option<ServiceCommand> {
        if !self.overlays.is_open(kind) {
            return None;
        }
        let form = self.overlays.close(kind);
        self.input_mode = InputMode::Normal;
        tracing::debug!(?kind, "Closed overlay");

        form.and_then(|form| form.pending_submission())
            .map(ServiceCommand::CancelSubmission)
    }

    // ========================
    // Forms
    // ========================

    fn with_form(&mut self, f: impl FnOnce(&mut FormState)) {
        if let Some(form) = self.focused_form_mut() {
            f(form);
        }
    }

    fn with_editing_form(&mut self, f: impl FnOnce(&mut FormState)) {
        if self.input_mode == InputMode::Editing {
            self.with_form(f);
        }
    }

    pub fn start_editing(&mut self) {
        let started = self.focused_form_mut().is_some_and(|form| form.begin_edit());
        if started {
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Demo identification switch, no verification behind it
    pub fn toggle_auth(&mut self) {
        self.auth_ready = !self.auth_ready;
        tracing::debug!(auth_ready = self.auth_ready, "Toggled strong identification");
    }

    /// Start submitting the focused form
    pub fn submit_focused_form(&mut self) -> Option<ServiceCommand> {
        let auth_ready = self.auth_ready;
        let accepts = self
            .focused_form()
            .is_some_and(|form| !form.is_sending() && form.submit_enabled(auth_ready));
        if !accepts {
            tracing::debug!("Submit ignored");
            return None;
        }

        let id = self.next_id();
        let form = self.focused_form_mut()?;
        form.begin_submit(id, auth_ready);
        let command = ServiceCommand::Submit {
            id,
            form: form.kind,
            draft: form.draft.clone(),
        };
        self.input_mode = InputMode::Normal;
        tracing::info!(id, "Submitting form");
        Some(command)
    }

    fn finish_submission(&mut self, id: u64, outcome: SubmissionOutcome) {
        let Some(slot) = self.locate_submission(id) else {
            tracing::debug!(id, "Dropping outcome for unmounted form");
            return;
        };

        match outcome {
            SubmissionOutcome::Success => self.complete_submission(slot),
            SubmissionOutcome::Pending => {
                tracing::debug!(id, "Submission pending");
            }
            SubmissionOutcome::Failure(reason) => {
                tracing::warn!(id, %reason, "Submission failed");
                if let Some(form) = self.form_at_mut(slot) {
                    form.reset_phase();
                }
                self.overlays
                    .show_toast(format!("{}: {}", TOAST_SUBMIT_FAILED, reason));
            }
        }
    }

    /// Completion callback: close the modal or clear the section, then notify
    fn complete_submission(&mut self, slot: FormSlot) {
        let was_focused = self.focused_slot() == slot;
        let Some(kind) = self.form_at_mut(slot).map(|form| form.kind) else {
            return;
        };

        match slot {
            FormSlot::Modal(overlay) => {
                self.overlays.close(overlay);
            }
            FormSlot::Section => {
                self.section_form = Some(FormState::new(kind));
            }
        }
        if was_focused {
            self.input_mode = InputMode::Normal;
        }
        tracing::info!(?kind, "Submission succeeded");
        self.overlays.show_toast(kind.success_message());
    }

    // ========================
    // Referral
    // ========================

    pub fn copy_referral_link(&mut self) -> Option<ServiceCommand> {
        if !self.overlays.refer {
            return None;
        }
        Some(ServiceCommand::CopyToClipboard {
            text: REFERRAL_LINK.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormPhase;
    use crate::models::FormKind;
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap())
    }

    fn run(state: AppState, events: Vec<UiEvent>) -> (AppState, Vec<ServiceCommand>) {
        let mut state = state;
        let mut all = Vec::new();
        for event in events {
            let (next, commands) = state.apply(event);
            state = next;
            all.extend(commands);
        }
        (state, all)
    }

    fn submitted_id(commands: &[ServiceCommand]) -> u64 {
        match commands {
            [ServiceCommand::Submit { id, .. }] => *id,
            other => panic!("expected one submit, got {:?}", other),
        }
    }

    fn toast_message(state: &AppState) -> Option<&str> {
        state.overlays.toast.as_ref().map(|t| t.message.as_str())
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.active_tab, Tab::Home);
        assert!(state.section_form.is_none());
        assert!(!state.auth_ready);
        assert_eq!(state.days_left, 255);
    }

    #[test]
    fn test_select_tab_mounts_matching_form() {
        for tab in Tab::ALL {
            let (state, commands) = state().apply(UiEvent::SelectTab(tab));
            assert!(commands.is_empty());
            assert_eq!(state.active_tab, tab);
            assert_eq!(state.section_form.as_ref().map(|f| f.kind), tab.form());
        }
    }

    #[test]
    fn test_tab_switch_discards_draft() {
        let (state, _) = run(
            state(),
            vec![
                UiEvent::SelectTab(Tab::Update),
                UiEvent::StartEditing,
                UiEvent::CharInput('X'),
                UiEvent::StopEditing,
            ],
        );
        assert_eq!(state.section_form.as_ref().unwrap().draft.get("model"), "X");

        // Re-selecting the active tab keeps the draft
        let (state, _) = state.apply(UiEvent::SelectTab(Tab::Update));
        assert_eq!(state.section_form.as_ref().unwrap().draft.get("model"), "X");

        let (state, _) = run(state, vec![UiEvent::SelectTab(Tab::Home), UiEvent::SelectTab(Tab::Update)]);
        assert_eq!(state.section_form.as_ref().unwrap().draft.get("model"), "");
    }

    #[test]
    fn test_profile_shortcut_and_start_application() {
        let (state, _) = state().apply(UiEvent::OpenProfile);
        assert_eq!(state.active_tab, Tab::Profile);
        let (state, _) = state.apply(UiEvent::StartApplication);
        assert_eq!(state.active_tab, Tab::Application);
    }

    #[test]
    fn test_issue_modal_round_trip() {
        let before = state();
        let (state, _) = run(
            before.clone(),
            vec![
                UiEvent::OpenOverlay(OverlayKind::Issue),
                UiEvent::NextField,
                UiEvent::StartEditing,
                UiEvent::CharInput('a'),
                UiEvent::StopEditing,
                UiEvent::CloseOverlay(OverlayKind::Issue),
            ],
        );
        assert_eq!(state.overlays, before.overlays);
        assert_eq!(state, before);
    }

    #[test]
    fn test_issue_modal_submission_completes_once() {
        let (state, commands) = run(
            state(),
            vec![UiEvent::OpenOverlay(OverlayKind::Issue), UiEvent::Submit],
        );
        let id = submitted_id(&commands);
        let form = state.overlays.issue.as_ref().unwrap();
        assert_eq!(form.phase, FormPhase::Sending { submission: id });

        // A second submit while sending does nothing
        let (state, commands) = state.apply(UiEvent::Submit);
        assert!(commands.is_empty());

        let (state, _) = state.on_service_response(ServiceResponse::Submitted {
            id,
            outcome: SubmissionOutcome::Success,
        });
        assert!(!state.overlays.is_open(OverlayKind::Issue));
        assert_eq!(toast_message(&state), Some("Vikailmoitus lähetetty"));

        // A duplicate answer finds no form and changes nothing
        let toast_before = state.overlays.toast.clone();
        let (state, _) = state.on_service_response(ServiceResponse::Submitted {
            id,
            outcome: SubmissionOutcome::Success,
        });
        assert_eq!(state.overlays.toast, toast_before);
    }

    #[test]
    fn test_submit_carries_draft() {
        let (_, commands) = run(
            state(),
            vec![
                UiEvent::OpenOverlay(OverlayKind::Update),
                UiEvent::StartEditing,
                UiEvent::CharInput('Z'),
                UiEvent::StopEditing,
                UiEvent::Submit,
            ],
        );
        match &commands[..] {
            [ServiceCommand::Submit { form, draft, .. }] => {
                assert_eq!(*form, FormKind::Update);
                assert_eq!(draft.get("model"), "Z");
            }
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn test_section_submission_clears_tab() {
        let (state, commands) = run(
            state(),
            vec![
                UiEvent::SelectTab(Tab::Update),
                UiEvent::StartEditing,
                UiEvent::CharInput('Q'),
                UiEvent::StopEditing,
                UiEvent::Submit,
            ],
        );
        let id = submitted_id(&commands);
        let (state, _) = state.on_service_response(ServiceResponse::Submitted {
            id,
            outcome: SubmissionOutcome::Success,
        });
        let form = state.section_form.as_ref().unwrap();
        assert_eq!(form.phase, FormPhase::Idle);
        assert_eq!(form.draft.get("model"), "");
        assert_eq!(toast_message(&state), Some("Päivityspyyntö vastaanotettu"));
    }

    #[test]
    fn test_application_submit_requires_auth() {
        let (state, commands) = run(state(), vec![UiEvent::SelectTab(Tab::Application), UiEvent::Submit]);
        assert!(commands.is_empty());
        assert!(!state.section_form.as_ref().unwrap().is_sending());

        let (state, commands) = run(state, vec![UiEvent::ToggleAuth, UiEvent::Submit]);
        submitted_id(&commands);
        assert!(state.section_form.as_ref().unwrap().is_sending());
    }

    #[test]
    fn test_toggle_auth_twice_is_identity() {
        for initial in [false, true] {
            let mut start = state();
            start.auth_ready = initial;
            let (end, _) = run(start.clone(), vec![UiEvent::ToggleAuth, UiEvent::ToggleAuth]);
            assert_eq!(end.auth_ready, initial);
            assert_eq!(end, start);
        }
    }

    #[test]
    fn test_failure_returns_form_to_idle() {
        let (state, commands) = run(state(), vec![UiEvent::SelectTab(Tab::Issue), UiEvent::Submit]);
        let id = submitted_id(&commands);
        let (state, _) = state.on_service_response(ServiceResponse::Submitted {
            id,
            outcome: SubmissionOutcome::Failure(String::from("palvelin ei vastaa")),
        });
        assert_eq!(state.section_form.as_ref().unwrap().phase, FormPhase::Idle);
        assert_eq!(toast_message(&state), Some("Lähetys epäonnistui: palvelin ei vastaa"));
    }

    #[test]
    fn test_pending_keeps_sending_until_final_outcome() {
        let (state, commands) = run(state(), vec![UiEvent::OpenOverlay(OverlayKind::Update), UiEvent::Submit]);
        let id = submitted_id(&commands);
        let (state, _) = state.on_service_response(ServiceResponse::Submitted {
            id,
            outcome: SubmissionOutcome::Pending,
        });
        assert!(state.overlays.update.as_ref().unwrap().is_sending());
        assert!(state.overlays.toast.is_none());

        let (state, _) = state.on_service_response(ServiceResponse::Submitted {
            id,
            outcome: SubmissionOutcome::Success,
        });
        assert!(state.overlays.update.is_none());
    }

    #[test]
    fn test_unmount_cancels_pending_submission() {
        let (state, commands) = run(state(), vec![UiEvent::SelectTab(Tab::Issue), UiEvent::Submit]);
        let id = submitted_id(&commands);
        let (state, commands) = state.apply(UiEvent::SelectTab(Tab::Home));
        assert_eq!(commands, vec![ServiceCommand::CancelSubmission(id)]);

        // A late answer no longer affects anything
        let (state, _) = state.on_service_response(ServiceResponse::Submitted {
            id,
            outcome: SubmissionOutcome::Success,
        });
        assert!(state.overlays.toast.is_none());

        let (state, commands) = run(state, vec![UiEvent::OpenOverlay(OverlayKind::Issue), UiEvent::Submit]);
        let id = submitted_id(&commands);
        let (_, commands) = state.apply(UiEvent::CloseOverlay(OverlayKind::Issue));
        assert_eq!(commands, vec![ServiceCommand::CancelSubmission(id)]);
    }

    #[test]
    fn test_editing_only_in_editing_mode() {
        let (state, _) = run(state(), vec![UiEvent::SelectTab(Tab::Update), UiEvent::CharInput('x')]);
        assert_eq!(state.section_form.as_ref().unwrap().draft.get("model"), "");

        // Selects cannot be edited as text
        let (state, _) = run(state, vec![UiEvent::NextField, UiEvent::NextField, UiEvent::NextField, UiEvent::StartEditing]);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_copy_referral_link_only_from_modal() {
        let (state, commands) = state().apply(UiEvent::CopyReferralLink);
        assert!(commands.is_empty());

        let (_, commands) = run(state, vec![UiEvent::OpenOverlay(OverlayKind::Refer), UiEvent::CopyReferralLink]);
        assert_eq!(
            commands,
            vec![ServiceCommand::CopyToClipboard {
                text: REFERRAL_LINK.to_string()
            }]
        );
    }

    #[test]
    fn test_clipboard_outcomes_surface_as_toasts() {
        let cases = [
            (ClipboardOutcome::Copied, "Kopioitu leikepöydälle"),
            (ClipboardOutcome::Unsupported, "Leikepöytä ei ole käytettävissä"),
            (ClipboardOutcome::Denied(String::from("io")), "Kopiointi estetty"),
        ];
        for (outcome, expected) in cases {
            let (state, _) = state().on_service_response(ServiceResponse::ClipboardWritten { outcome });
            assert_eq!(toast_message(&state), Some(expected));
        }
    }

    #[test]
    fn test_bell_and_toast_expiry() {
        let (state, _) = state().apply(UiEvent::RingBell);
        assert_eq!(toast_message(&state), Some("Ilmoitukset: ei uusia"));
        let id = state.overlays.toast.as_ref().unwrap().id;
        let (state, _) = state.apply(UiEvent::ToastAnimationEnd(id));
        assert!(state.overlays.toast.is_none());
    }
}
