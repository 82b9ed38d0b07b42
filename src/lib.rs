//! # Garage TUI
//!
//! A terminal dashboard for a vehicle-maintenance REST backend.
//!
//! ## Features
//! - Browse the vehicle list (loaded on startup, refreshed on demand)
//! - Inspect a vehicle's details by id
//! - View a vehicle's maintenance history
//! - Search maintenance records by vehicle id + service id pair
//! - Submit new maintenance records
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod constants;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{MaintenanceForm, MaintenanceRecord, NewMaintenance, Vehicle};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use app::{AppActor, AppState};
pub use network::{ApiClient, NetworkActor};
