//! Service messages - communication between App and Service layers

use crate::forms::FormDraft;
use crate::models::{ClipboardOutcome, FormKind, SubmissionOutcome};

/// Commands sent from App layer to Service layer
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCommand {
    /// Hand a form draft to the submission service
    Submit {
        id: u64,
        form: FormKind,
        draft: FormDraft,
    },
    /// The submitting form was unmounted; drop its pending submission
    CancelSubmission(u64),
    /// Write text to the host clipboard
    CopyToClipboard {
        text: String,
    },
    /// Shutdown the service actor
    Shutdown,
}

/// Responses sent from Service layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResponse {
    /// The submission service answered
    Submitted {
        id: u64,
        outcome: SubmissionOutcome,
    },
    /// A pending submission was cancelled before it answered
    Cancelled {
        id: u64,
    },
    /// Clipboard write finished
    ClipboardWritten {
        outcome: ClipboardOutcome,
    },
}

impl ServiceResponse {
    /// No further responses follow for this submission or write
    pub fn is_terminal(&self) -> bool {
        !matches!(
            self,
            ServiceResponse::Submitted {
                outcome: SubmissionOutcome::Pending,
                ..
            }
        )
    }
}
