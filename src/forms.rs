//! Form components - field definitions, drafts and local editing state
//!
//! Each form instance owns its draft and sending phase. Dropping the
//! instance (tab switch, modal close) discards both.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::FormKind;

/// Kind of input a field accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Select(&'static [&'static str]),
}

/// Static description of a form field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        FieldSpec { name, label, placeholder, kind: FieldKind::Text }
    }

    const fn multiline(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        FieldSpec { name, label, placeholder, kind: FieldKind::Multiline }
    }

    const fn select(name: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        FieldSpec { name, label, placeholder: "", kind: FieldKind::Select(options) }
    }

    pub fn is_editable_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text | FieldKind::Multiline)
    }
}

const FAULT_TYPES: &[&str] = &["Moottori", "Jarrut", "Renkaat", "Sähkö / varoitusvalo", "Muu"];
const YES_NO: &[&str] = &["Kyllä", "Ei"];

const ISSUE_FIELDS: &[FieldSpec] = &[
    FieldSpec::select("fault_type", "Vian tyyppi", FAULT_TYPES),
    FieldSpec::multiline("description", "Kuvaus", "Kerro oireista, milloin ilmenee…"),
];

const UPDATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("model", "Toivottu malli", "Esim. Corolla Hybrid"),
    FieldSpec::text("annual_km", "Vuosittainen km", "20 000"),
    FieldSpec::text("monthly_price", "Toivottu kuukausihinta", "400 €"),
    FieldSpec::select("trade_in", "Vaihdetaan nykyinen auto?", YES_NO),
    FieldSpec::multiline("notes", "Lisätiedot", "Tarpeet, varusteet, aikataulu…"),
];

const APPLICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("first_name", "Etunimi", "Etunimi"),
    FieldSpec::text("last_name", "Sukunimi", "Sukunimi"),
    FieldSpec::text("personal_id", "Henkilötunnus (DEMO)", "Henkilötunnus (DEMO)"),
    FieldSpec::text("phone", "Puhelin", "Puhelin"),
    FieldSpec::text("email", "Sähköposti", "Sähköposti"),
    FieldSpec::text("vehicle_budget", "Toivottu auto / budjetti", "Esim. Yaris Hybrid ~ 350 €/kk"),
];

impl FormKind {
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FormKind::Issue => ISSUE_FIELDS,
            FormKind::Update => UPDATE_FIELDS,
            FormKind::Application => APPLICATION_FIELDS,
        }
    }

    /// Focusable controls in tab order
    pub fn controls(&self) -> Vec<Control> {
        let mut controls = Vec::new();
        if *self == FormKind::Application {
            controls.push(Control::AuthToggle);
        }
        controls.extend(self.fields().iter().copied().map(Control::Field));
        controls.push(Control::Submit);
        controls
    }
}

/// A focusable element of a form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Field(FieldSpec),
    AuthToggle,
    Submit,
}

/// Field values keyed by field name
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormDraft {
    values: BTreeMap<String, String>,
}

impl FormDraft {
    /// Fresh draft: empty text fields, selects on their first option
    pub fn for_form(kind: FormKind) -> Self {
        let values = kind
            .fields()
            .iter()
            .map(|f| {
                let initial = match f.kind {
                    FieldKind::Select(options) => options.first().copied().unwrap_or_default(),
                    FieldKind::Text | FieldKind::Multiline => "",
                };
                (f.name.to_string(), initial.to_string())
            })
            .collect();
        FormDraft { values }
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    fn value_mut(&mut self, name: &str) -> &mut String {
        self.values.entry(name.to_string()).or_default()
    }

}

/// Local sending indicator of a form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending { submission: u64 },
}

/// One mounted form instance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub kind: FormKind,
    pub draft: FormDraft,
    pub phase: FormPhase,
    pub focus: usize,
    pub cursor: usize,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        FormState {
            kind,
            draft: FormDraft::for_form(kind),
            phase: FormPhase::Idle,
            focus: 0,
            cursor: 0,
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.phase, FormPhase::Sending { .. })
    }

    /// Submission id currently in flight for this form
    pub fn pending_submission(&self) -> Option<u64> {
        match self.phase {
            FormPhase::Sending { submission } => Some(submission),
            FormPhase::Idle => None,
        }
    }

    /// Whether the submit control accepts input
    pub fn submit_enabled(&self, auth_ready: bool) -> bool {
        match self.kind {
            FormKind::Application => auth_ready,
            FormKind::Issue | FormKind::Update => true,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_sending() {
            crate::constants::SENDING_LABEL
        } else {
            self.kind.submit_label()
        }
    }

    pub fn focused_control(&self) -> Control {
        let controls = self.kind.controls();
        controls[self.focus.min(controls.len() - 1)]
    }

    /// Focused field when it takes typed text
    pub fn focused_text_field(&self) -> Option<FieldSpec> {
        match self.focused_control() {
            Control::Field(spec) if spec.is_editable_text() => Some(spec),
            _ => None,
        }
    }

    // ========================
    // Focus
    // ========================

    pub fn focus_next(&mut self) {
        let len = self.kind.controls().len();
        self.focus = (self.focus + 1) % len;
    }

    pub fn focus_prev(&mut self) {
        let len = self.kind.controls().len();
        self.focus = self.focus.checked_sub(1).unwrap_or(len - 1);
    }

    // ========================
    // Text editing
    // ========================

    /// Place the cursor at the end of the focused text field
    pub fn begin_edit(&mut self) -> bool {
        match self.focused_text_field() {
            Some(spec) => {
                self.cursor = self.draft.get(spec.name).len();
                true
            }
            None => false,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(spec) = self.focused_text_field() {
            let cursor = self.cursor;
            let value = self.draft.value_mut(spec.name);
            if cursor <= value.len() && value.is_char_boundary(cursor) {
                value.insert(cursor, c);
                self.cursor = cursor + c.len_utf8();
            }
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        if let Some(spec) = self.focused_text_field() {
            let cursor = self.cursor;
            let value = self.draft.value_mut(spec.name);
            let prev = value[..cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            value.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(spec) = self.focused_text_field() {
            let value = self.draft.get(spec.name);
            self.cursor = value[..self.cursor.min(value.len())]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(spec) = self.focused_text_field() {
            let value = self.draft.get(spec.name);
            if self.cursor < value.len() {
                self.cursor = value[self.cursor..]
                    .char_indices()
                    .nth(1)
                    .map(|(i, _)| self.cursor + i)
                    .unwrap_or(value.len());
            }
        }
    }

    // ========================
    // Selects
    // ========================

    /// Move the focused select to its next (or previous) option
    pub fn cycle_option(&mut self, forward: bool) {
        if let Control::Field(FieldSpec { name, kind: FieldKind::Select(options), .. }) =
            self.focused_control()
        {
            if options.is_empty() {
                return;
            }
            let current = options
                .iter()
                .position(|o| *o == self.draft.get(name))
                .unwrap_or(0);
            let next = if forward {
                (current + 1) % options.len()
            } else {
                current.checked_sub(1).unwrap_or(options.len() - 1)
            };
            self.draft.set(name, options[next]);
        }
    }

    // ========================
    // Submission
    // ========================

    /// Enter the sending phase; false when already sending or disabled
    pub fn begin_submit(&mut self, submission: u64, auth_ready: bool) -> bool {
        if self.is_sending() || !self.submit_enabled(auth_ready) {
            return false;
        }
        self.phase = FormPhase::Sending { submission };
        true
    }

    /// Back to idle after a failed submission
    pub fn reset_phase(&mut self) {
        self.phase = FormPhase::Idle;
    }
}
