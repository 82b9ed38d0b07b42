//! Network layer - HTTP request execution against the maintenance backend
//!
//! The Network actor receives API commands and sends back typed responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::ApiClient;
