//! Service layer - simulated submissions and clipboard access
//!
//! The Service actor receives commands from the App layer and sends back
//! outcomes. Both collaborators are injected so tests control timing.

pub mod actor;
pub mod submission;
pub mod clipboard;

pub use actor::ServiceActor;
pub use clipboard::{Clipboard, Osc52Clipboard};
pub use submission::{OutcomeSender, SimulatedSubmission, SubmissionService};
