//! Overlay manager - modal slots and the toast
//!
//! Slots are independent: nothing prevents several modals from being open
//! at once, the UI just never offers a second "open" while one is showing.

use crate::forms::FormState;
use crate::models::OverlayKind;

/// A transient notification line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Visibility of every overlay
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overlays {
    /// Issue modal, holding its form instance while open
    pub issue: Option<FormState>,
    /// Update modal, holding its form instance while open
    pub update: Option<FormState>,
    pub refer: bool,
    pub toast: Option<Toast>,
    next_toast_id: u64,
}

impl Overlays {
    pub fn is_open(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Issue => self.issue.is_some(),
            OverlayKind::Update => self.update.is_some(),
            OverlayKind::Refer => self.refer,
        }
    }

    /// Open a modal. Returns false if it was already open.
    pub fn open(&mut self, kind: OverlayKind) -> bool {
        if self.is_open(kind) {
            return false;
        }
        match kind {
            OverlayKind::Issue | OverlayKind::Update => {
                let slot = self.slot_mut(kind);
                *slot = kind.form().map(FormState::new);
            }
            OverlayKind::Refer => self.refer = true,
        }
        true
    }

    /// Close a modal, handing back the form instance it hosted
    pub fn close(&mut self, kind: OverlayKind) -> Option<FormState> {
        match kind {
            OverlayKind::Issue | OverlayKind::Update => self.slot_mut(kind).take(),
            OverlayKind::Refer => {
                self.refer = false;
                None
            }
        }
    }

    /// Topmost open modal, in drawing order
    pub fn top(&self) -> Option<OverlayKind> {
        [OverlayKind::Refer, OverlayKind::Update, OverlayKind::Issue]
            .into_iter()
            .find(|kind| self.is_open(*kind))
    }

    pub fn form(&self, kind: OverlayKind) -> Option<&FormState> {
        match kind {
            OverlayKind::Issue => self.issue.as_ref(),
            OverlayKind::Update => self.update.as_ref(),
            OverlayKind::Refer => None,
        }
    }

    pub fn form_mut(&mut self, kind: OverlayKind) -> Option<&mut FormState> {
        match kind {
            OverlayKind::Issue => self.issue.as_mut(),
            OverlayKind::Update => self.update.as_mut(),
            OverlayKind::Refer => None,
        }
    }

    /// Modal hosting the form waiting on `submission`
    pub fn find_submission(&self, submission: u64) -> Option<OverlayKind> {
        [OverlayKind::Issue, OverlayKind::Update]
            .into_iter()
            .find(|kind| {
                self.form(*kind)
                    .and_then(FormState::pending_submission)
                    == Some(submission)
            })
    }

    fn slot_mut(&mut self, kind: OverlayKind) -> &mut Option<FormState> {
        match kind {
            OverlayKind::Update => &mut self.update,
            _ => &mut self.issue,
        }
    }

    // ========================
    // Toast
    // ========================

    /// Show a toast, replacing any visible one
    pub fn show_toast(&mut self, message: impl Into<String>) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toast = Some(Toast {
            id,
            message: message.into(),
        });
        id
    }

    /// Clear the toast if `id` is still the one displayed
    pub fn toast_animation_end(&mut self, id: u64) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
            true
        } else {
            false
        }
    }
}
