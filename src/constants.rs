//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base address of the maintenance backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable that overrides the backend base address
pub const BASE_URL_ENV: &str = "GARAGE_API_URL";

/// Log file written next to the binary
pub const LOG_FILE: &str = "garage-tui.log";

/// Application name
pub const APP_NAME: &str = "Garage TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve the backend base address from the environment
pub fn base_url() -> String {
    std::env::var(BASE_URL_ENV).unwrap_or_else(|_| String::from(DEFAULT_BASE_URL))
}
