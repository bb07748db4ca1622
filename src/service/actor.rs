//! Service actor - runs submissions and clipboard writes in the Tokio runtime

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::messages::{ServiceCommand, ServiceResponse};
use crate::models::SubmissionOutcome;
use crate::service::clipboard::Clipboard;
use crate::service::submission::SubmissionService;

/// Failure reason when a service stops before its final outcome
const NO_FINAL_OUTCOME: &str = "ei lopullista vastausta";

/// Service actor that processes submission and clipboard commands
pub struct ServiceActor<S, C> {
    submissions: Arc<S>,
    clipboard: Arc<C>,
    response_tx: mpsc::UnboundedSender<ServiceResponse>,
    /// Finished tasks report the submission id they were running, if any
    active_tasks: JoinSet<Option<u64>>,
    cancel_handles: HashMap<u64, oneshot::Sender<()>>,
}

impl<S: SubmissionService, C: Clipboard> ServiceActor<S, C> {
    pub fn new(submissions: S, clipboard: C, response_tx: mpsc::UnboundedSender<ServiceResponse>) -> Self {
        ServiceActor {
            submissions: Arc::new(submissions),
            clipboard: Arc::new(clipboard),
            response_tx,
            active_tasks: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the service actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<ServiceCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(ServiceCommand::Submit { id, form, draft }) => {
                            let (cancel_tx, mut cancel_rx) = oneshot::channel();
                            self.cancel_handles.insert(id, cancel_tx);

                            let service = Arc::clone(&self.submissions);
                            let response_tx = self.response_tx.clone();

                            self.active_tasks.spawn(async move {
                                tracing::info!(id, ?form, "Submitting");
                                let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
                                let work = service.submit(form, draft, outcome_tx);
                                tokio::pin!(work);
                                let mut work_done = false;

                                // Forward outcomes until a final one
                                loop {
                                    tokio::select! {
                                        _ = &mut cancel_rx => {
                                            tracing::debug!(id, "Submission abandoned");
                                            break;
                                        }
                                        _ = &mut work, if !work_done => {
                                            work_done = true;
                                        }
                                        outcome = outcome_rx.recv() => {
                                            let outcome = outcome.unwrap_or_else(|| {
                                                tracing::warn!(id, "Submission ended without a final outcome");
                                                SubmissionOutcome::Failure(String::from(NO_FINAL_OUTCOME))
                                            });
                                            tracing::info!(id, ?outcome, "Submission answered");
                                            let response = ServiceResponse::Submitted { id, outcome };
                                            let terminal = response.is_terminal();
                                            let _ = response_tx.send(response);
                                            if terminal {
                                                break;
                                            }
                                        }
                                    }
                                }
                                Some(id)
                            });
                        }

                        Some(ServiceCommand::CancelSubmission(id)) => {
                            if let Some(cancel_tx) = self.cancel_handles.remove(&id) {
                                tracing::info!(id, "Cancelling submission");
                                let _ = cancel_tx.send(());
                                let _ = self.response_tx.send(ServiceResponse::Cancelled { id });
                            }
                        }

                        Some(ServiceCommand::CopyToClipboard { text }) => {
                            let clipboard = Arc::clone(&self.clipboard);
                            let response_tx = self.response_tx.clone();

                            self.active_tasks.spawn_blocking(move || {
                                let outcome = clipboard.write_text(&text);
                                tracing::info!(?outcome, "Clipboard write finished");
                                let _ = response_tx.send(ServiceResponse::ClipboardWritten { outcome });
                                None
                            });
                        }

                        Some(ServiceCommand::Shutdown) | None => {
                            // Abandon all pending submissions
                            for (_, cancel_tx) in self.cancel_handles.drain() {
                                let _ = cancel_tx.send(());
                            }
                            break;
                        }
                    }
                }

                // Forget cancel handles of finished submissions
                Some(result) = self.active_tasks.join_next() => {
                    if let Ok(Some(id)) = result {
                        self.cancel_handles.remove(&id);
                    }
                }
            }
        }
    }
}
