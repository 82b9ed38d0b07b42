//! App layer - owns the dashboard state and the five user actions
//!
//! The App actor receives UI events and network responses,
//! updates the per-panel state slices, and emits network
//! commands and render snapshots.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::AppState;
pub use actor::AppActor;
