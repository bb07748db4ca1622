//! App state - pure data structure with no I/O logic

use chrono::NaiveDate;

use crate::app::overlays::Overlays;
use crate::forms::FormState;
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::{Contract, OverlayKind, Tab};

/// Main application state - pure data, no I/O
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    // View router
    pub active_tab: Tab,
    /// Form mounted as the body of the active section
    pub section_form: Option<FormState>,

    // Overlays (modals + toast)
    pub overlays: Overlays,

    // Strong identification demo switch
    pub auth_ready: bool,

    pub input_mode: InputMode,

    // Contract shown in the header and home section
    pub contract: Contract,
    pub days_left: u32,

    next_submission_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        let contract = Contract::demo(today);
        let days_left = contract.days_left(today);
        AppState {
            active_tab: Tab::Home,
            section_form: None,
            overlays: Overlays::default(),
            auth_ready: false,
            input_mode: InputMode::Normal,
            contract,
            days_left,
            next_submission_id: 1,
        }
    }

    /// Generate a unique submission ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_submission_id;
        self.next_submission_id += 1;
        id
    }

    /// Slot receiving form input: the top modal, else the active section
    pub fn focused_slot(&self) -> FormSlot {
        match self.overlays.top() {
            Some(kind) => FormSlot::Modal(kind),
            None => FormSlot::Section,
        }
    }

    pub fn focused_form(&self) -> Option<&FormState> {
        match self.focused_slot() {
            FormSlot::Section => self.section_form.as_ref(),
            FormSlot::Modal(kind) => self.overlays.form(kind),
        }
    }

    pub fn focused_form_mut(&mut self) -> Option<&mut FormState> {
        let slot = self.focused_slot();
        self.form_at_mut(slot)
    }

    /// Where the form waiting on `submission` is mounted
    pub fn locate_submission(&self, submission: u64) -> Option<FormSlot> {
        if let Some(kind) = self.overlays.find_submission(submission) {
            return Some(FormSlot::Modal(kind));
        }
        self.section_form
            .as_ref()
            .and_then(FormState::pending_submission)
            .filter(|id| *id == submission)
            .map(|_| FormSlot::Section)
    }

    pub fn form_at_mut(&mut self, slot: FormSlot) -> Option<&mut FormState> {
        match slot {
            FormSlot::Section => self.section_form.as_mut(),
            FormSlot::Modal(kind) => self.overlays.form_mut(kind),
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            active_tab: self.active_tab,
            section_form: self.section_form.clone(),
            overlays: self.overlays.clone(),
            auth_ready: self.auth_ready,
            input_mode: self.input_mode,
            contract: self.contract.clone(),
            days_left: self.days_left,
        }
    }
}

/// Where a form instance is mounted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormSlot {
    Section,
    Modal(OverlayKind),
}
