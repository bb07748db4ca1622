//! Render state - data structure sent from App layer to UI for rendering

use crate::app::overlays::{Overlays, Toast};
use crate::forms::FormState;
use crate::messages::ui_events::InputMode;
use crate::models::{Contract, OverlayKind, Tab};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    // View router
    pub active_tab: Tab,
    pub section_form: Option<FormState>,

    // Overlays
    pub overlays: Overlays,

    // Root flags
    pub auth_ready: bool,
    pub input_mode: InputMode,

    // Contract header
    pub contract: Contract,
    pub days_left: u32,
}

impl RenderState {
    /// Overlay drawn on top, which also receives keyboard input
    pub fn top_overlay(&self) -> Option<OverlayKind> {
        self.overlays.top()
    }

    /// Form that receives form input: the top modal's form, else the section form
    pub fn focused_form(&self) -> Option<&FormState> {
        match self.top_overlay() {
            Some(kind) => self.overlays.form(kind),
            None => self.section_form.as_ref(),
        }
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.overlays.toast.as_ref()
    }
}

impl Default for RenderState {
    fn default() -> Self {
        crate::app::AppState::default().to_render_state()
    }
}
