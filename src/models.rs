use chrono::{Days, Months, NaiveDate};
use serde::Serialize;

/// Application sections
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Issue,
    Update,
    Application,
    Profile,
}

impl Tab {
    /// Every section, in navigation order
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Issue, Tab::Update, Tab::Application, Tab::Profile];

    /// Sections listed in the navigation bar (profile is reached from the bottom bar)
    pub const NAV: [Tab; 4] = [Tab::Home, Tab::Issue, Tab::Update, Tab::Application];

    /// Stable identifier of the section
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Home => "etusivu",
            Tab::Issue => "vikailmoitus",
            Tab::Update => "paivitys",
            Tab::Application => "hakemus",
            Tab::Profile => "profiili",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Etusivu",
            Tab::Issue => "Vikailmoitus",
            Tab::Update => "Päivitä sopimus",
            Tab::Application => "Uusi hakemus",
            Tab::Profile => "Profiili",
        }
    }

    /// Form mounted as the body of this section, if any
    pub fn form(&self) -> Option<FormKind> {
        match self {
            Tab::Issue => Some(FormKind::Issue),
            Tab::Update => Some(FormKind::Update),
            Tab::Application => Some(FormKind::Application),
            Tab::Home | Tab::Profile => None,
        }
    }
}

/// The three demo forms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Issue,
    Update,
    Application,
}

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Issue => "Vikailmoitus",
            FormKind::Update => "Päivitä sopimus",
            FormKind::Application => "Uuden asiakkaan hakemus",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormKind::Issue => "Lähetä ilmoitus",
            FormKind::Update => "Lähetä pyyntö",
            FormKind::Application => "Lähetä hakemus",
        }
    }

    /// Toast shown once the submission succeeds
    pub fn success_message(&self) -> &'static str {
        use crate::constants::{TOAST_APPLICATION_RECEIVED, TOAST_ISSUE_SENT, TOAST_UPDATE_RECEIVED};
        match self {
            FormKind::Issue => TOAST_ISSUE_SENT,
            FormKind::Update => TOAST_UPDATE_RECEIVED,
            FormKind::Application => TOAST_APPLICATION_RECEIVED,
        }
    }
}

/// Modal overlays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Issue,
    Update,
    Refer,
}

impl OverlayKind {
    pub fn title(&self) -> &'static str {
        match self {
            OverlayKind::Issue => "Ilmoita viasta",
            OverlayKind::Update => "Päivitä sopimus",
            OverlayKind::Refer => "Suosittele kaverille",
        }
    }

    /// Form hosted inside the modal
    pub fn form(&self) -> Option<FormKind> {
        match self {
            OverlayKind::Issue => Some(FormKind::Issue),
            OverlayKind::Update => Some(FormKind::Update),
            OverlayKind::Refer => None,
        }
    }
}

/// Alert severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Info,
    Warning,
    Error,
}

/// Result reported by a submission service
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Accepted and done
    Success,
    /// Accepted, final outcome follows later
    Pending,
    /// Rejected with a reason
    Failure(String),
}

/// Result of a clipboard write
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Copied,
    Unsupported,
    Denied(String),
}

impl ClipboardOutcome {
    /// Toast surfaced for this outcome
    pub fn message(&self) -> &'static str {
        use crate::constants::{TOAST_CLIPBOARD_DENIED, TOAST_CLIPBOARD_UNSUPPORTED, TOAST_COPIED};
        match self {
            ClipboardOutcome::Copied => TOAST_COPIED,
            ClipboardOutcome::Unsupported => TOAST_CLIPBOARD_UNSUPPORTED,
            ClipboardOutcome::Denied(_) => TOAST_CLIPBOARD_DENIED,
        }
    }
}

/// The customer's leasing contract shown on the home section
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contract {
    pub number: String,
    pub vehicle: String,
    pub monthly_fee_eur: u32,
    pub km_per_year: u32,
    pub ends_on: NaiveDate,
}

impl Contract {
    /// Demo contract ending 8 months and 12 days after `today`
    pub fn demo(today: NaiveDate) -> Self {
        let ends_on = today
            .checked_add_months(Months::new(8))
            .and_then(|d| d.checked_add_days(Days::new(12)))
            .unwrap_or(today);
        Contract {
            number: String::from("CL-2025-001234"),
            vehicle: String::from("Toyota Yaris Hybrid 1.5"),
            monthly_fee_eur: 389,
            km_per_year: 15_000,
            ends_on,
        }
    }

    /// Days until the contract ends, never less than one
    pub fn days_left(&self, today: NaiveDate) -> u32 {
        let days = (self.ends_on - today).num_days();
        days.max(1) as u32
    }

    /// "Kuukausi 389 € · 15 000 km/v"
    pub fn terms_line(&self) -> String {
        format!(
            "Kuukausi {} € · {} km/v",
            self.monthly_fee_eur,
            group_thousands(self.km_per_year)
        )
    }
}

/// Split a day count into 30-day months and remaining days
pub fn months_and_days(days_left: u32) -> (u32, u32) {
    (days_left / 30, days_left % 30)
}

/// Format with a space as thousands separator, e.g. 15 000
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_demo_contract_end_date() {
        let today = date(2025, 1, 10);
        let contract = Contract::demo(today);
        assert_eq!(contract.ends_on, date(2025, 9, 22));
        assert_eq!(contract.days_left(today), 255);
    }

    #[test]
    fn test_days_left_never_below_one() {
        let contract = Contract::demo(date(2025, 1, 10));
        assert_eq!(contract.days_left(date(2030, 1, 1)), 1);
    }

    #[test]
    fn test_months_and_days() {
        assert_eq!(months_and_days(255), (8, 15));
        assert_eq!(months_and_days(29), (0, 29));
        assert_eq!(months_and_days(30), (1, 0));
    }

    #[test]
    fn test_terms_line() {
        let contract = Contract::demo(date(2025, 1, 10));
        assert_eq!(contract.terms_line(), "Kuukausi 389 € · 15 000 km/v");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_234_567), "1 234 567");
    }

    #[test]
    fn test_tab_ids_are_unique() {
        let mut ids: Vec<&str> = Tab::ALL.iter().map(|t| t.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Tab::ALL.len());
        assert!(!Tab::NAV.contains(&Tab::Profile));
    }
}
