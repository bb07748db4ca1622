//! Submission service - where form drafts go when submitted

use std::future::Future;

use tokio::sync::mpsc;

use crate::config::SubmissionDelays;
use crate::forms::FormDraft;
use crate::models::{FormKind, SubmissionOutcome};

/// Channel a submission reports its outcomes on
pub type OutcomeSender = mpsc::UnboundedSender<SubmissionOutcome>;

/// JSON body of a submission: the form kind and its field values
pub fn submission_payload(form: FormKind, draft: &FormDraft) -> serde_json::Value {
    serde_json::json!({ "form": form, "draft": draft })
}

/// Accepts submitted form drafts
pub trait SubmissionService: Send + Sync + 'static {
    /// Run one submission. Reports any number of `Pending` outcomes
    /// followed by a final `Success` or `Failure` on `outcomes`.
    fn submit(
        &self,
        form: FormKind,
        draft: FormDraft,
        outcomes: OutcomeSender,
    ) -> impl Future<Output = ()> + Send;
}

/// Demo service: waits a fixed delay per form and always succeeds.
/// The draft goes nowhere.
#[derive(Clone, Debug, Default)]
pub struct SimulatedSubmission {
    delays: SubmissionDelays,
}

impl SimulatedSubmission {
    pub fn new(delays: SubmissionDelays) -> Self {
        SimulatedSubmission { delays }
    }
}

impl SubmissionService for SimulatedSubmission {
    fn submit(
        &self,
        form: FormKind,
        draft: FormDraft,
        outcomes: OutcomeSender,
    ) -> impl Future<Output = ()> + Send {
        let delay = self.delays.for_form(form);
        async move {
            let payload = submission_payload(form, &draft);
            tracing::debug!(%payload, delay_ms = delay.as_millis() as u64, "Simulating submission");
            tokio::time::sleep(delay).await;
            let _ = outcomes.send(SubmissionOutcome::Success);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::{timeout, Instant};

    #[test]
    fn test_payload_names_form_and_fields() {
        let mut draft = FormDraft::for_form(FormKind::Issue);
        draft.set("description", "Jarrut vinkuvat");
        assert_eq!(
            submission_payload(FormKind::Issue, &draft),
            serde_json::json!({
                "form": "issue",
                "draft": { "fault_type": "Moottori", "description": "Jarrut vinkuvat" }
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_delay_per_form() {
        let service = SimulatedSubmission::default();
        let cases = [
            (FormKind::Issue, 600),
            (FormKind::Update, 700),
            (FormKind::Application, 900),
        ];
        for (form, ms) in cases {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let start = Instant::now();
            service.submit(form, FormDraft::for_form(form), tx).await;
            assert_eq!(rx.recv().await, Some(SubmissionOutcome::Success));
            assert_eq!(rx.recv().await, None);
            let elapsed = start.elapsed();
            assert!(elapsed >= Duration::from_millis(ms));
            assert!(elapsed < Duration::from_millis(ms + 10));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_done_before_delay() {
        let service = SimulatedSubmission::new(SubmissionDelays {
            issue_ms: 100,
            ..SubmissionDelays::default()
        });
        let (tx, mut rx) = mpsc::unbounded_channel();
        let early = timeout(
            Duration::from_millis(99),
            service.submit(FormKind::Issue, FormDraft::default(), tx),
        )
        .await;
        assert!(early.is_err());
        assert!(rx.try_recv().is_err());
    }
}
