//! Application constants
//!
//! Centralized location for the fixed Finnish copy and demo defaults.

/// Brand shown in the header
pub const BRAND_NAME: &str = "Courier Leasing";

/// Alt text of the vehicle picture
pub const CAR_IMAGE_ALT: &str = "Toyota Yaris";

/// Referral link copied from the referral modal
pub const REFERRAL_LINK: &str = "https://courierleasing.fi/suosittele?code=ABC123";

/// Shortened referral link shown in the modal
pub const REFERRAL_LINK_SHORT: &str = "…/suosittele?code=ABC123";

// Toast messages
pub const TOAST_ISSUE_SENT: &str = "Vikailmoitus lähetetty";
pub const TOAST_UPDATE_RECEIVED: &str = "Päivityspyyntö vastaanotettu";
pub const TOAST_APPLICATION_RECEIVED: &str = "Hakemus vastaanotettu";
pub const TOAST_COPIED: &str = "Kopioitu leikepöydälle";
pub const TOAST_CLIPBOARD_UNSUPPORTED: &str = "Leikepöytä ei ole käytettävissä";
pub const TOAST_CLIPBOARD_DENIED: &str = "Kopiointi estetty";
pub const TOAST_NO_NOTIFICATIONS: &str = "Ilmoitukset: ei uusia";
pub const TOAST_SUBMIT_FAILED: &str = "Lähetys epäonnistui";

/// Submit button label while a submission is in flight
pub const SENDING_LABEL: &str = "Lähetetään…";

/// Default simulated submission delays (milliseconds)
pub const DEFAULT_ISSUE_DELAY_MS: u64 = 600;
pub const DEFAULT_UPDATE_DELAY_MS: u64 = 700;
pub const DEFAULT_APPLICATION_DELAY_MS: u64 = 900;

/// Default toast display time before its animation ends
pub const DEFAULT_TOAST_MS: u64 = 2500;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "courier-leasing.log";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
