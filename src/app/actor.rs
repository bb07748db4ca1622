//! App actor - message loop processing UI events and service responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::diagnostics;
use crate::messages::{RenderState, ServiceCommand, ServiceResponse, UiEvent};

/// App actor that processes UI events and service responses
pub struct AppActor {
    state: AppState,
    service_tx: mpsc::UnboundedSender<ServiceCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        service_tx: mpsc::UnboundedSender<ServiceCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        Self::with_state(AppState::default(), service_tx, render_tx)
    }

    /// Start from a given state (fixed date in tests)
    pub fn with_state(
        state: AppState,
        service_tx: mpsc::UnboundedSender<ServiceCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            service_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut service_rx: mpsc::UnboundedReceiver<ServiceResponse>,
    ) {
        let AppActor {
            mut state,
            service_tx,
            render_tx,
        } = self;

        // Send initial render state
        let initial = state.to_render_state();
        diagnostics::run_smoke_checks(&initial);
        let _ = render_tx.send(initial);

        loop {
            let commands = tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if matches!(event, UiEvent::Quit) {
                        tracing::info!("Quit requested");
                        let _ = service_tx.send(ServiceCommand::Shutdown);
                        break;
                    }
                    let (next, commands) = state.apply(event);
                    state = next;
                    commands
                }
                Some(response) = service_rx.recv() => {
                    let (next, commands) = state.on_service_response(response);
                    state = next;
                    commands
                }
                else => break,
            };

            for command in commands {
                let _ = service_tx.send(command);
            }
            let _ = render_tx.send(state.to_render_state());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOAST_ISSUE_SENT;
    use crate::forms::FormDraft;
    use crate::models::{FormKind, OverlayKind, SubmissionOutcome};
    use crate::service::{Osc52Clipboard, OutcomeSender, ServiceActor, SubmissionService};
    use chrono::NaiveDate;
    use std::future::Future;
    use std::time::Duration;

    /// Acknowledges at once, approves half a minute later
    struct SlowApproval;

    impl SubmissionService for SlowApproval {
        fn submit(
            &self,
            _form: FormKind,
            _draft: FormDraft,
            outcomes: OutcomeSender,
        ) -> impl Future<Output = ()> + Send {
            async move {
                let _ = outcomes.send(SubmissionOutcome::Pending);
                tokio::time::sleep(Duration::from_secs(30)).await;
                let _ = outcomes.send(SubmissionOutcome::Success);
            }
        }
    }

    #[tokio::test]
    async fn test_actor_round_trip() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (svc_cmd_tx, mut svc_cmd_rx) = mpsc::unbounded_channel();
        let (svc_resp_tx, svc_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let state = AppState::new(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        let actor = AppActor::with_state(state, svc_cmd_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, svc_resp_rx));

        let initial = render_rx.recv().await.unwrap();
        assert_eq!(initial.days_left, 255);

        ui_tx.send(UiEvent::OpenOverlay(OverlayKind::Issue)).unwrap();
        ui_tx.send(UiEvent::Submit).unwrap();

        let id = match svc_cmd_rx.recv().await.unwrap() {
            ServiceCommand::Submit { id, .. } => id,
            other => panic!("unexpected command {:?}", other),
        };

        svc_resp_tx
            .send(ServiceResponse::Submitted {
                id,
                outcome: SubmissionOutcome::Success,
            })
            .unwrap();

        let mut last = initial;
        while last.overlays.toast.is_none() {
            last = render_rx.recv().await.unwrap();
        }
        assert!(!last.overlays.is_open(OverlayKind::Issue));

        ui_tx.send(UiEvent::Quit).unwrap();
        assert_eq!(svc_cmd_rx.recv().await, Some(ServiceCommand::Shutdown));
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_submission_closes_modal_when_approved() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (svc_cmd_tx, svc_cmd_rx) = mpsc::unbounded_channel();
        let (svc_resp_tx, svc_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let service = ServiceActor::new(SlowApproval, Osc52Clipboard::new(false), svc_resp_tx);
        let service_handle = tokio::spawn(service.run(svc_cmd_rx));

        let state = AppState::new(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        let actor = AppActor::with_state(state, svc_cmd_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, svc_resp_rx));

        ui_tx.send(UiEvent::OpenOverlay(OverlayKind::Issue)).unwrap();
        ui_tx.send(UiEvent::Submit).unwrap();

        // Pending: the modal stays open and sending
        let mut saw_pending = false;
        let mut last = render_rx.recv().await.unwrap();
        while last.overlays.toast.is_none() {
            if last.overlays.form(OverlayKind::Issue).is_some_and(|f| f.is_sending()) {
                saw_pending = true;
            }
            last = render_rx.recv().await.unwrap();
        }
        assert!(saw_pending);
        assert!(!last.overlays.is_open(OverlayKind::Issue));
        assert_eq!(last.toast().map(|t| t.message.as_str()), Some(TOAST_ISSUE_SENT));

        ui_tx.send(UiEvent::Quit).unwrap();
        handle.await.unwrap();
        service_handle.await.unwrap();
    }
}
