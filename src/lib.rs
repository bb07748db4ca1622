//! # Courier Leasing
//!
//! Terminal rendition of the Courier Leasing customer app demo.
//!
//! ## Features
//! - Section navigation: home, issue report, contract update, application, profile
//! - Modal issue report, contract update and referral dialogs
//! - Toast notifications
//! - Forms with simulated submission latency
//! - Referral link copy via the terminal clipboard (OSC 52)
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Service Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod forms;
pub mod messages;
pub mod models;
pub mod service;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::Settings;
pub use forms::{FormDraft, FormState};
pub use messages::{RenderState, ServiceCommand, ServiceResponse, UiEvent};
pub use models::{ClipboardOutcome, FormKind, OverlayKind, SubmissionOutcome, Tab};
pub use service::{Osc52Clipboard, ServiceActor, SimulatedSubmission};
