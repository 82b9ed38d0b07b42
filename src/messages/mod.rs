//! Message types for inter-layer communication in the actor-based architecture.
//!
//! Defines everything that flows between the UI, App, and Network layers:
//! key-derived UI events, typed API commands/responses, and render snapshots.

pub mod ui_events;
pub mod network;
pub mod render;

pub use ui_events::UiEvent;
pub use network::{NetworkCommand, NetworkResponse};
pub use render::RenderState;
