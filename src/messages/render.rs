//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{FormField, InputMode, PairField, Panel};
use crate::models::{MaintenanceForm, MaintenanceRecord, Vehicle};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Focus
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Backend address shown in the header
    pub base_url: String,

    // Vehicle list
    pub vehicles: Vec<Vehicle>,
    pub vehicles_loading: bool,
    pub vehicles_error: String,
    pub vehicles_scroll: u16,

    // Lookup panel (detail view)
    pub lookup_id: String,
    pub detail: Option<Vehicle>,
    pub detail_loading: bool,
    pub detail_error: String,

    // Vehicle-scoped maintenance
    pub maintenance: Vec<MaintenanceRecord>,
    pub maintenance_loading: bool,
    pub maintenance_error: String,
    pub maintenance_scroll: u16,

    // Pair search
    pub pair_vehicle_id: String,
    pub pair_service_id: String,
    pub pair_field: PairField,
    pub pair_records: Vec<MaintenanceRecord>,
    pub pair_loading: bool,
    pub pair_error: String,
    pub pair_scroll: u16,

    // Add-record form
    pub form: MaintenanceForm,
    pub form_field: FormField,
    pub create_loading: bool,
    pub create_message: String,
    pub create_error: String,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            active_panel: Panel::Vehicles,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            base_url: crate::constants::base_url(),
            vehicles: Vec::new(),
            vehicles_loading: false,
            vehicles_error: String::new(),
            vehicles_scroll: 0,
            lookup_id: String::new(),
            detail: None,
            detail_loading: false,
            detail_error: String::new(),
            maintenance: Vec::new(),
            maintenance_loading: false,
            maintenance_error: String::new(),
            maintenance_scroll: 0,
            pair_vehicle_id: String::new(),
            pair_service_id: String::new(),
            pair_field: PairField::VehicleId,
            pair_records: Vec::new(),
            pair_loading: false,
            pair_error: String::new(),
            pair_scroll: 0,
            form: MaintenanceForm::default(),
            form_field: FormField::VehicleId,
            create_loading: false,
            create_message: String::new(),
            create_error: String::new(),
            show_help: false,
        }
    }
}
