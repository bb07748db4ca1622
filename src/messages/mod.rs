//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI, App, and Service layers.

pub mod ui_events;
pub mod service;
pub mod render;

pub use ui_events::UiEvent;
pub use service::{ServiceCommand, ServiceResponse};
pub use render::RenderState;
